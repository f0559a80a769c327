use std::collections::HashMap;

use crate::errors::{ConnectionError, Result};
use crate::graph_representation::Graph;
use crate::types::*;

/// maps the odd-degree vertices of a graph onto the dense range 0..len
///
/// the local id of a vertex is its position in the odd-degree vertex list of the graph,
/// the list itself is used for the translation back to the global id.
#[derive(Clone, Debug, Default)]
pub struct IndexTranslator {
    local_ids: HashMap<NodeId, usize>,
    global_ids: NodeIds,
}

impl IndexTranslator {

    /// ids outside of 0..vertex_count are skipped
    pub fn new(graph: &(impl Graph + ?Sized)) -> Self {
        let num_vertices = graph.vertex_count();
        let vertices = graph.odd_degree_vertices()
            .into_iter()
            .filter(|vertex| (*vertex as usize) < num_vertices)
            .collect();

        IndexTranslator::from_vertices(vertices)
    }

    /// assigns the local ids in the given order, duplicates keep their first id
    pub fn from_vertices(vertices: NodeIds) -> Self {
        let mut local_ids = HashMap::with_capacity(vertices.len());
        let mut global_ids = Vec::with_capacity(vertices.len());

        for vertex in vertices {
            if !local_ids.contains_key(&vertex) {
                local_ids.insert(vertex, global_ids.len());
                global_ids.push(vertex);
            }
        }

        IndexTranslator {
            local_ids,
            global_ids,
        }
    }

    pub fn translate(&self, global_id: NodeId) -> Result<usize> {
        self.local_ids.get(&global_id)
            .copied()
            .ok_or(ConnectionError::UnknownVertex { vertex: global_id })
    }

    /// panics if the local id has not been assigned by this translator
    pub fn global_id(&self, local_id: usize) -> NodeId {
        self.global_ids[local_id]
    }

    /// the translated vertices ordered by local id
    pub fn vertices(&self) -> &[NodeId] {
        &self.global_ids
    }

    pub fn len(&self) -> usize {
        self.global_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global_ids.is_empty()
    }
}
