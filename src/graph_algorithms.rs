use std::cmp::Ordering;

use crate::errors::{ConnectionError, Result};
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::binary_heap::{HeapElement, MinBinaryHeap};

#[derive(Copy, Clone, Debug)]
pub struct DijkstraState {
    pub distance: Weight,
    pub node_id: NodeId,
}

impl HeapElement for DijkstraState {

    fn unique_index(&self) -> usize {
        self.node_id as usize
    }
}

// ties on the distance are broken by the lower node id
impl Ord for DijkstraState {

    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

impl PartialOrd for DijkstraState {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DijkstraState {

    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraState {}

/// point to point dijkstra that stops as soon as the goal is settled
pub fn dijkstra(start: NodeId, goal: NodeId, graph: &(impl Graph + ?Sized)) -> Option<Weight> {
    let mut to_visit: MinBinaryHeap<DijkstraState> = MinBinaryHeap::new(graph.vertex_count());
    to_visit.insert(DijkstraState {distance: 0.0, node_id: start});

    let mut distance_table: Weights = vec![INFINITY; graph.vertex_count()];
    distance_table[start as usize] = 0.0;

    while let Some(DijkstraState {distance, node_id}) = to_visit.pop() {
        if node_id == goal {
            return Some(distance);
        }

        for (target_node, weight) in graph.edges_of(node_id) {
            let new_distance = distance + *weight;

            if new_distance < distance_table[*target_node as usize] {
                distance_table[*target_node as usize] = new_distance;

                to_visit.insert_or_decrease(DijkstraState {distance: new_distance, node_id: *target_node});
            }
        }
    }

    None
}

/// result of a single source search: the distance and the predecessor on a shortest path for every node
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathTree {
    start: NodeId,
    distances: Weights,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {

    /// tree in which only the start node has been reached
    pub fn new(start: NodeId, num_vertices: usize) -> Self {
        let mut distances = vec![INFINITY; num_vertices];
        distances[start as usize] = 0.0;

        ShortestPathTree {
            start,
            distances,
            predecessors: vec![None; num_vertices],
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// INFINITY for unreached or unknown nodes
    pub fn distance(&self, node: NodeId) -> Weight {
        self.distances.get(node as usize).copied().unwrap_or(INFINITY)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node as usize).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// records that the best known path to node ends with the arc predecessor -> node
    pub fn relax(&mut self, node: NodeId, distance: Weight, predecessor: NodeId) {
        self.distances[node as usize] = distance;
        self.predecessors[node as usize] = Some(predecessor);
    }

    /// walks the predecessor chain back from end and returns the nodes in start -> end order
    pub fn path_to(&self, end: NodeId) -> Result<NodeIds> {
        let unreachable = ConnectionError::Unreachable { start: self.start, stop: end };

        if !self.is_reachable(end) {
            return Err(unreachable);
        }

        let mut path = vec![end];
        let mut current = end;

        // a shortest path never visits more nodes than the graph has
        while current != self.start {
            match self.predecessor(current) {
                Some(predecessor) if path.len() < self.distances.len() => {
                    path.push(predecessor);
                    current = predecessor;
                },
                _ => return Err(unreachable),
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// single source shortest path search over graphs with non-negative weights
pub trait ShortestPathEngine {

    /// identifier used to select the engine at runtime
    fn name(&self) -> &'static str;

    /// distances and predecessors from start to every node of the graph
    fn compute(&mut self, graph: &dyn Graph, start: NodeId) -> ShortestPathTree;
}

impl<E: ShortestPathEngine + ?Sized> ShortestPathEngine for Box<E> {

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compute(&mut self, graph: &dyn Graph, start: NodeId) -> ShortestPathTree {
        (**self).compute(graph, start)
    }
}

/// classic dijkstra that scans all unvisited nodes for the minimum, O(V^2)
#[derive(Debug, Default)]
pub struct LinearScanDijkstra {
    visited: Vec<bool>,
}

impl LinearScanDijkstra {

    pub fn new() -> Self {
        LinearScanDijkstra::default()
    }

    /// first unvisited node in index order with the smallest finite distance
    fn closest_unvisited(&self, tree: &ShortestPathTree) -> Option<NodeId> {
        let mut closest = None;
        let mut min_distance = INFINITY;

        for (node, distance) in tree.distances().iter().enumerate() {
            if !self.visited[node] && *distance < min_distance {
                min_distance = *distance;
                closest = Some(node as NodeId);
            }
        }

        closest
    }
}

impl ShortestPathEngine for LinearScanDijkstra {

    fn name(&self) -> &'static str {
        "linear_scan"
    }

    fn compute(&mut self, graph: &dyn Graph, start: NodeId) -> ShortestPathTree {
        let num_vertices = graph.vertex_count();
        let mut tree = ShortestPathTree::new(start, num_vertices);

        self.visited.clear();
        self.visited.resize(num_vertices, false);

        // every iteration visits one node, stops early once only unreachable nodes are left
        while let Some(current_node) = self.closest_unvisited(&tree) {
            self.visited[current_node as usize] = true;
            let current_distance = tree.distance(current_node);

            for (target_node, weight) in graph.edges_of(current_node) {
                if self.visited[*target_node as usize] {
                    continue;
                }

                let new_distance = current_distance + *weight;

                if new_distance < tree.distance(*target_node) {
                    tree.relax(*target_node, new_distance, current_node);
                }
            }
        }

        tree
    }
}

/// dijkstra on an indexed binary heap with decrease key, O(E log V)
pub struct BinaryHeapDijkstra {
    queue: MinBinaryHeap<DijkstraState>,
}

impl BinaryHeapDijkstra {

    pub fn new() -> Self {
        BinaryHeapDijkstra {
            queue: MinBinaryHeap::new(0),
        }
    }
}

impl Default for BinaryHeapDijkstra {

    fn default() -> Self {
        BinaryHeapDijkstra::new()
    }
}

impl ShortestPathEngine for BinaryHeapDijkstra {

    fn name(&self) -> &'static str {
        "binary_heap"
    }

    fn compute(&mut self, graph: &dyn Graph, start: NodeId) -> ShortestPathTree {
        let num_vertices = graph.vertex_count();
        let mut tree = ShortestPathTree::new(start, num_vertices);

        self.queue.reset(num_vertices);
        self.queue.insert(DijkstraState {distance: 0.0, node_id: start});

        while let Some(DijkstraState {distance: current_distance, node_id: current_node}) = self.queue.pop() {
            for (target_node, weight) in graph.edges_of(current_node) {
                let new_distance = current_distance + *weight;

                // settled nodes can not improve since all weights are non-negative
                if new_distance < tree.distance(*target_node) {
                    tree.relax(*target_node, new_distance, current_node);
                    self.queue.insert_or_decrease(DijkstraState {distance: new_distance, node_id: *target_node});
                }
            }
        }

        tree
    }
}

pub fn all_engines() -> Vec<Box<dyn ShortestPathEngine>> {
    vec![
        Box::new(LinearScanDijkstra::new()),
        Box::new(BinaryHeapDijkstra::new()),
    ]
}

pub fn engine_by_name(name: &str) -> Option<Box<dyn ShortestPathEngine>> {
    all_engines().into_iter().find(|engine| engine.name() == name)
}
