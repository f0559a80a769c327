use crate::types::{NodeId, Weight};

/// failures of a connection lookup, always reported with the offending vertex ids
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("can not get a connection between vertex {vertex} and itself")]
    SelfConnection { vertex: NodeId },

    #[error("vertex {vertex} is not an odd-degree vertex of the graph")]
    UnknownVertex { vertex: NodeId },

    #[error("vertex {stop} is unreachable from vertex {start}")]
    Unreachable { start: NodeId, stop: NodeId },
}

pub type Result<T> = std::result::Result<T, ConnectionError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("graph file does not contain a `p edge` header line")]
    MissingHeader,

    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: NodeId, num_vertices: usize },

    #[error("edge weight {weight} is not a finite non-negative number")]
    InvalidWeight { weight: Weight },
}
