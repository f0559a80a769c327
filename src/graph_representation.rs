use crate::errors::GraphError;
use crate::types::*;
use std::ops::Range;

/// read only view of an undirected weighted graph as consumed by the shortest path engines and the connection cache
pub trait Graph {

    fn vertex_count(&self) -> usize;

    /// all arcs leaving the given node as (target node, weight) pairs
    fn edges_of(&self, node: NodeId) -> &Arclist;

    /// the nodes with an odd number of incident edges, the order has to be stable for a given graph
    fn odd_degree_vertices(&self) -> NodeIds;

    fn node_ids(&self) -> Range<NodeId> {
        0..(self.vertex_count() as NodeId)
    }
}

/// undirected graph stored as one arclist per node, every edge is stored in the arclists of both end nodes
#[derive(Clone, Debug, Default)]
pub struct GraphList {

    arcs: Vec<Vec<(NodeId, Weight)>>,
    degrees: Vec<usize>,
    num_edges: usize,
    total_weight: Weight,
}

impl GraphList {

    pub fn new(num_vertices: usize) -> GraphList {
        GraphList {
            arcs: vec![Vec::new(); num_vertices],
            degrees: vec![0; num_vertices],
            num_edges: 0,
            total_weight: 0.0,
        }
    }

    /// creates a graph from a list of undirected (start, end, weight) edges
    pub fn from_edges(num_vertices: usize, edges: &[(NodeId, NodeId, Weight)]) -> Result<GraphList, GraphError> {
        let mut graph = GraphList::new(num_vertices);

        for (start, end, weight) in edges {
            graph.add_edge(*start, *end, *weight)?;
        }

        Ok(graph)
    }

    /// adds an undirected edge, parallel edges are kept as separate edges
    pub fn add_edge(&mut self, start: NodeId, end: NodeId, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }

        self.arcs[start as usize].push((end, weight));
        self.degrees[start as usize] += 1;

        // a loop is stored once but still counts twice towards the degree
        if start != end {
            self.arcs[end as usize].push((start, weight));
        }
        self.degrees[end as usize] += 1;

        self.num_edges += 1;
        self.total_weight += weight;

        Ok(())
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.degrees[node as usize]
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// sum of all undirected edge weights, i.e. the cost of traversing every edge exactly once
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// every undirected edge exactly once as (start, end, weight) with start <= end
    pub fn edges(&self) -> Vec<(NodeId, NodeId, Weight)> {
        let mut edges = Vec::with_capacity(self.num_edges);

        for start in self.node_ids() {
            for (end, weight) in &self.arcs[start as usize] {
                if start <= *end {
                    edges.push((start, *end, *weight));
                }
            }
        }

        edges
    }

    fn check_vertex(&self, vertex: NodeId) -> Result<(), GraphError> {
        if (vertex as usize) < self.arcs.len() {
            Ok(())
        }
        else {
            Err(GraphError::VertexOutOfRange { vertex, num_vertices: self.arcs.len() })
        }
    }
}

impl Graph for GraphList {

    fn vertex_count(&self) -> usize {
        self.arcs.len()
    }

    fn edges_of(&self, node: NodeId) -> &Arclist {
        &self.arcs[node as usize]
    }

    fn odd_degree_vertices(&self) -> NodeIds {
        self.node_ids()
            .filter(|node| self.degrees[*node as usize] % 2 == 1)
            .collect()
    }
}
