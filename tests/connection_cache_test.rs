use std::cell::Cell;
use std::rc::Rc;

use odd_vertex_connections::errors::ConnectionError;
use odd_vertex_connections::graph_algorithms::{BinaryHeapDijkstra, LinearScanDijkstra, ShortestPathEngine, ShortestPathTree};
use odd_vertex_connections::graph_representation::{Graph, GraphList};
use odd_vertex_connections::types::*;
use odd_vertex_connections::{Connection, ConnectionCache};

/// wraps an engine and counts how often a search was started
struct CountingEngine<E: ShortestPathEngine> {
    inner: E,
    runs: Rc<Cell<usize>>,
}

impl<E: ShortestPathEngine> ShortestPathEngine for CountingEngine<E> {

    fn name(&self) -> &'static str {
        "counting"
    }

    fn compute(&mut self, graph: &dyn Graph, start: NodeId) -> ShortestPathTree {
        self.runs.set(self.runs.get() + 1);
        self.inner.compute(graph, start)
    }
}

fn counting_engine() -> (CountingEngine<LinearScanDijkstra>, Rc<Cell<usize>>) {
    let runs = Rc::new(Cell::new(0));
    let engine = CountingEngine {
        inner: LinearScanDijkstra::new(),
        runs: Rc::clone(&runs),
    };

    (engine, runs)
}

/// reaches every node but stores a predecessor loop for node 3
struct LoopingPredecessorEngine;

impl ShortestPathEngine for LoopingPredecessorEngine {

    fn name(&self) -> &'static str {
        "looping_predecessor"
    }

    fn compute(&mut self, graph: &dyn Graph, start: NodeId) -> ShortestPathTree {
        let mut tree = ShortestPathTree::new(start, graph.vertex_count());

        for node in graph.node_ids().filter(|node| *node != start && *node != 3) {
            tree.relax(node, 1.0, start);
        }
        if start != 3 {
            tree.relax(3, 1.0, 3);
        }

        tree
    }
}

/// wraps a graph and reports extra odd-degree vertices that do not exist
struct GraphWithPhantomVertices {
    inner: GraphList,
    phantom_vertices: NodeIds,
}

impl Graph for GraphWithPhantomVertices {

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edges_of(&self, node: NodeId) -> &Arclist {
        self.inner.edges_of(node)
    }

    fn odd_degree_vertices(&self) -> NodeIds {
        let mut vertices = self.inner.odd_degree_vertices();
        vertices.extend_from_slice(&self.phantom_vertices);

        vertices
    }
}

//  0 ──1── 1
//  │     / │
//  1   5   1
//  │ /     │
//  3 ──1── 2
// only 1 and 3 have an odd degree
fn cycle_with_chord(weight_3_0: Weight) -> GraphList {
    GraphList::from_edges(4, &[
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 0, weight_3_0),
        (1, 3, 5.0),
    ]).unwrap()
}

// center 0 with leaves 1, 2 and 3, every node has an odd degree
fn star() -> GraphList {
    GraphList::from_edges(4, &[
        (0, 1, 2.0),
        (0, 2, 3.0),
        (0, 3, 4.0),
    ]).unwrap()
}

// two components: 0 - 1 and 2 - 3
fn two_components() -> GraphList {
    GraphList::from_edges(4, &[
        (0, 1, 1.5),
        (2, 3, 2.5),
    ]).unwrap()
}

#[test]
fn test_odd_vertices_are_translated_in_graph_order() {
    let graph = cycle_with_chord(1.0);
    let cache = ConnectionCache::build(&graph);

    assert_eq!(graph.odd_degree_vertices(), vec![1, 3]);
    assert_eq!(cache.odd_vertices(), &[1, 3]);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.fill_passes(), 0);
}

#[test]
fn test_detour_is_cheaper_than_direct_edge() {
    let graph = cycle_with_chord(1.0);
    let mut cache = ConnectionCache::build(&graph);

    let connection = cache.get_connection(1, 3).unwrap();

    assert_eq!(connection.cost(), 2.0);
    assert_eq!(connection.len(), 3);
    assert!(connection.path() == [1, 2, 3] || connection.path() == [1, 0, 3]);
}

#[test]
fn test_unique_shortest_path_is_returned() {
    let graph = cycle_with_chord(2.0);
    let mut cache = ConnectionCache::build(&graph);

    let connection = cache.get_connection(1, 3).unwrap().clone();
    assert_eq!(connection, Connection::new(2.0, vec![1, 2, 3]));

    let reverse = cache.get_connection(3, 1).unwrap();
    assert_eq!(*reverse, Connection::new(2.0, vec![3, 2, 1]));
}

#[test]
fn test_self_connection_is_rejected() {
    let graph = star();
    let mut cache = ConnectionCache::build(&graph);

    for vertex in graph.odd_degree_vertices() {
        assert_eq!(cache.get_connection(vertex, vertex), Err(ConnectionError::SelfConnection { vertex }));
    }

    // checked before the translation
    assert_eq!(cache.get_connection(42, 42), Err(ConnectionError::SelfConnection { vertex: 42 }));
    assert_eq!(cache.fill_passes(), 0);
}

#[test]
fn test_unknown_vertices_are_rejected() {
    let graph = cycle_with_chord(1.0);
    let mut cache = ConnectionCache::build(&graph);

    // even degree
    assert_eq!(cache.get_connection(0, 3), Err(ConnectionError::UnknownVertex { vertex: 0 }));
    assert_eq!(cache.get_connection(1, 2), Err(ConnectionError::UnknownVertex { vertex: 2 }));

    // out of range
    assert_eq!(cache.get_connection(99, 1), Err(ConnectionError::UnknownVertex { vertex: 99 }));
    assert_eq!(cache.get_connection(3, 4), Err(ConnectionError::UnknownVertex { vertex: 4 }));

    assert_eq!(cache.fill_passes(), 0);
}

#[test]
fn test_disconnected_vertices_are_unreachable() {
    let graph = two_components();
    let mut cache = ConnectionCache::build(&graph);

    assert_eq!(cache.get_connection(0, 2), Err(ConnectionError::Unreachable { start: 0, stop: 2 }));
    assert!(!cache.is_cached(0, 3));
    assert!(!cache.is_cached(3, 0));

    // the vertices inside one component are still connected
    assert_eq!(cache.get_connection(0, 1).unwrap().cost(), 1.5);
    assert_eq!(cache.get_connection(3, 2).unwrap().path(), &[3, 2]);
}

#[test]
fn test_one_search_fills_the_whole_row() {
    let graph = star();
    let (engine, runs) = counting_engine();
    let mut cache = ConnectionCache::with_engine(&graph, engine);

    assert_eq!(cache.get_connection(1, 2).unwrap().cost(), 5.0);
    assert_eq!(runs.get(), 1);

    // same start, different stop
    assert_eq!(cache.get_connection(1, 3).unwrap().cost(), 6.0);
    assert_eq!(cache.get_connection(1, 0).unwrap().cost(), 2.0);
    assert_eq!(runs.get(), 1);

    // mirrored cells were written by the same pass
    assert_eq!(cache.get_connection(3, 1).unwrap().path(), &[3, 0, 1]);
    assert_eq!(runs.get(), 1);

    assert!(!cache.is_cached(2, 3));
    assert_eq!(cache.get_connection(2, 3).unwrap().cost(), 7.0);
    assert_eq!(runs.get(), 2);
    assert_eq!(cache.fill_passes(), 2);
}

#[test]
fn test_repeated_lookups_are_identical() {
    let graph = star();
    let (engine, runs) = counting_engine();
    let mut cache = ConnectionCache::with_engine(&graph, engine);

    let first = cache.get_connection(2, 3).unwrap().clone();
    let second = cache.get_connection(2, 3).unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(first.cost().to_bits(), second.cost().to_bits());
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_cells_are_always_written_in_pairs() {
    let graph = star();
    let mut cache = ConnectionCache::build(&graph);

    cache.get_connection(2, 0).unwrap();

    for start in graph.odd_degree_vertices() {
        for stop in graph.odd_degree_vertices() {
            assert_eq!(cache.is_cached(start, stop), cache.is_cached(stop, start));
        }
        assert!(!cache.is_cached(start, start));
    }
}

#[test]
fn test_populate_all_runs_one_search_per_incomplete_row() {
    let graph = star();
    let (engine, runs) = counting_engine();
    let mut cache = ConnectionCache::with_engine(&graph, engine);

    // row 3 is already complete once rows 0, 1 and 2 have been searched
    assert_eq!(cache.populate_all(), Ok(3));
    assert_eq!(runs.get(), 3);

    for start in 0..4 {
        for stop in 0..4 {
            assert_eq!(cache.is_cached(start, stop), start != stop);
        }
    }

    assert_eq!(cache.populate_all(), Ok(0));
    assert_eq!(runs.get(), 3);
}

#[test]
fn test_rebuild_drops_all_connections() {
    let star_graph = star();
    let chord_graph = cycle_with_chord(1.0);
    let mut cache = ConnectionCache::build(&star_graph);

    cache.get_connection(1, 2).unwrap();
    assert_eq!(cache.fill_passes(), 1);

    cache.rebuild(&chord_graph);

    assert_eq!(cache.odd_vertices(), &[1, 3]);
    assert_eq!(cache.fill_passes(), 0);
    assert!(!cache.is_cached(1, 3));
    assert_eq!(cache.get_connection(1, 2), Err(ConnectionError::UnknownVertex { vertex: 2 }));
    assert_eq!(cache.get_connection(1, 3).unwrap().cost(), 2.0);
}

#[test]
fn test_engines_agree_on_costs() {
    let graph = cycle_with_chord(1.0);
    let mut linear = ConnectionCache::with_engine(&graph, LinearScanDijkstra::new());
    let mut heap = ConnectionCache::with_engine(&graph, BinaryHeapDijkstra::new());

    assert_eq!(linear.engine().name(), "linear_scan");
    assert_eq!(heap.engine().name(), "binary_heap");
    assert_eq!(linear.get_connection(3, 1).unwrap().cost(), heap.get_connection(3, 1).unwrap().cost());
}

#[test]
fn test_graph_without_odd_vertices_has_an_empty_cache() {
    let graph = GraphList::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).unwrap();
    let mut cache = ConnectionCache::build(&graph);

    assert!(cache.is_empty());
    assert_eq!(cache.populate_all(), Ok(0));
    assert_eq!(cache.get_connection(0, 1), Err(ConnectionError::UnknownVertex { vertex: 0 }));
    assert_eq!(cache.to_string(), " |");
}

#[test]
fn test_rendering_does_not_fill_the_cache() {
    let graph = cycle_with_chord(1.0);
    let mut cache = ConnectionCache::build(&graph);

    let empty = cache.to_string();
    assert_eq!(empty.matches("N/A").count(), 4);
    assert_eq!(cache.fill_passes(), 0);

    cache.get_connection(1, 3).unwrap();
    let filled = cache.to_string();

    assert_eq!(filled.matches("N/A").count(), 2);
    assert_eq!(filled.matches("2.00").count(), 2);
    assert!(filled.lines().next().unwrap().contains('1'));
    assert_eq!(cache.fill_passes(), 1);
}

#[test]
fn test_connection_display() {
    let connection = Connection::new(2.5, vec![4, 0, 7]);

    assert_eq!(connection.to_string(), "2.50");
    assert_eq!(format!("{:#}", connection), "2.5 : [4, 0, 7]");
    assert_eq!(format!("{:#}", Connection::new(0.0, Vec::new())), "0 : []");
    assert_eq!(connection.reversed().path(), &[7, 0, 4]);
    assert_eq!(connection.start(), Some(4));
    assert_eq!(connection.stop(), Some(7));
}

#[test]
fn test_failed_fill_pass_stores_nothing() {
    let graph = star();
    let mut cache = ConnectionCache::with_engine(&graph, LoopingPredecessorEngine);

    // the path to 1 is valid, the path to 3 cannot be rebuilt
    assert_eq!(cache.get_connection(0, 1), Err(ConnectionError::Unreachable { start: 0, stop: 1 }));
    assert_eq!(cache.fill_passes(), 1);

    for start in graph.odd_degree_vertices() {
        for stop in graph.odd_degree_vertices() {
            assert!(!cache.is_cached(start, stop));
        }
    }

    assert!(cache.populate_all().is_err());
    assert!(!cache.is_cached(0, 1));
}

#[test]
fn test_odd_vertices_outside_the_graph_are_skipped() {
    let graph = GraphWithPhantomVertices {
        inner: GraphList::from_edges(2, &[(0, 1, 3.0)]).unwrap(),
        phantom_vertices: vec![5],
    };
    let mut cache = ConnectionCache::build(&graph);

    assert_eq!(cache.odd_vertices(), &[0, 1]);
    assert_eq!(cache.get_connection(0, 5), Err(ConnectionError::UnknownVertex { vertex: 5 }));
    assert_eq!(cache.get_connection(5, 1), Err(ConnectionError::UnknownVertex { vertex: 5 }));
    assert_eq!(cache.get_connection(1, 0).unwrap().path(), &[1, 0]);
}
