use std::fmt;

use crate::types::*;

/// cost and node sequence of a shortest path between two odd-degree vertices
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    cost: Weight,
    path: NodeIds,
}

impl Connection {

    pub fn new(cost: Weight, path: NodeIds) -> Self {
        Connection {
            cost,
            path
        }
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn start(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    pub fn stop(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// number of nodes on the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// the same route travelled in the opposite direction
    pub fn reversed(&self) -> Connection {
        Connection {
            cost: self.cost,
            path: self.path.iter().rev().copied().collect(),
        }
    }
}

/// `{}` prints the cost, `{:#}` prints cost and path
impl fmt::Display for Connection {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return write!(f, "{:.2}", self.cost);
        }

        write!(f, "{} : [", self.cost)?;
        for (index, node) in self.path.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "]")
    }
}
