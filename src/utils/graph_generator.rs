use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::GraphError;
use crate::graph_representation::{Graph, GraphList};
use crate::types::*;

/// creates a random connected graph: a random spanning tree plus num_extra_edges random edges
/// all weights are whole numbers in 1..=max_weight
pub fn random_connected_graph<R: Rng + ?Sized>(rng: &mut R, num_vertices: usize, num_extra_edges: usize, max_weight: u32) -> Result<GraphList, GraphError> {
    let mut graph = GraphList::new(num_vertices);
    let max_weight = max_weight.max(1);

    let mut order: NodeIds = (0..num_vertices as NodeId).collect();
    order.shuffle(rng);

    // attach every node to a random node that is already part of the tree
    for index in 1..order.len() {
        let parent = order[rng.gen_range(0..index)];
        graph.add_edge(order[index], parent, random_weight(rng, max_weight))?;
    }

    if num_vertices < 2 {
        return Ok(graph);
    }

    for _ in 0..num_extra_edges {
        let start = rng.gen_range(0..num_vertices) as NodeId;
        let mut end = rng.gen_range(0..num_vertices - 1) as NodeId;
        if end >= start {
            end += 1;
        }

        graph.add_edge(start, end, random_weight(rng, max_weight))?;
    }

    Ok(graph)
}

/// picks count random pairs of distinct odd-degree vertices, pairs may repeat
pub fn random_odd_vertex_pairs<R: Rng + ?Sized>(rng: &mut R, graph: &(impl Graph + ?Sized), count: usize) -> Vec<(NodeId, NodeId)> {
    let odd_vertices = graph.odd_degree_vertices();

    if odd_vertices.len() < 2 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let pair: NodeIds = odd_vertices.choose_multiple(rng, 2).copied().collect();
            (pair[0], pair[1])
        })
        .collect()
}

fn random_weight<R: Rng + ?Sized>(rng: &mut R, max_weight: u32) -> Weight {
    rng.gen_range(1..=max_weight) as Weight
}
