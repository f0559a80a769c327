use std::fmt;

use tracing::{debug, trace, warn};

use crate::connections::connection::Connection;
use crate::connections::index_translator::IndexTranslator;
use crate::errors::{ConnectionError, Result};
use crate::graph_algorithms::{LinearScanDijkstra, ShortestPathEngine, ShortestPathTree};
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::data_structures::Matrix;

/// lazily filled matrix of shortest path connections between the odd-degree vertices of a graph
///
/// rows and columns are indexed by the local ids of the index translator. A cell is written at most
/// once and always together with its mirrored cell, so (a, b) and (b, a) share the cost and carry
/// reversed paths. The diagonal stays empty.
pub struct ConnectionCache<'g, E: ShortestPathEngine = LinearScanDijkstra> {
    graph: &'g dyn Graph,
    engine: E,
    translator: IndexTranslator,
    connections: Matrix<Option<Connection>>,
    fill_passes: usize,
}

impl<'g> ConnectionCache<'g> {

    pub fn build(graph: &'g dyn Graph) -> Self {
        ConnectionCache::with_engine(graph, LinearScanDijkstra::new())
    }
}

impl<'g, E: ShortestPathEngine> ConnectionCache<'g, E> {

    pub fn with_engine(graph: &'g dyn Graph, engine: E) -> Self {
        let mut cache = ConnectionCache {
            graph,
            engine,
            translator: IndexTranslator::default(),
            connections: Matrix::empty(),
            fill_passes: 0,
        };
        cache.rebuild(graph);

        cache
    }

    /// drops every cached connection and binds the cache to the given graph
    pub fn rebuild(&mut self, graph: &'g dyn Graph) {
        self.graph = graph;
        self.translator = IndexTranslator::new(graph);

        let num_odd_vertices = self.translator.len();
        self.connections.resize(num_odd_vertices, num_odd_vertices, None);
        self.fill_passes = 0;

        debug!(num_odd_vertices, engine = self.engine.name(), "built connection cache");
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// the odd-degree vertices in the order of their rows
    pub fn odd_vertices(&self) -> &[NodeId] {
        self.translator.vertices()
    }

    pub fn len(&self) -> usize {
        self.translator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translator.is_empty()
    }

    /// number of shortest path searches run since the last (re)build
    pub fn fill_passes(&self) -> usize {
        self.fill_passes
    }

    /// true if the connection is available without a search, never triggers one
    pub fn is_cached(&self, start: NodeId, stop: NodeId) -> bool {
        match (self.translator.translate(start), self.translator.translate(stop)) {
            (Ok(source), Ok(target)) => self.connections.get(source, target).is_some(),
            _ => false,
        }
    }

    /// shortest connection between two odd-degree vertices given by their global ids
    ///
    /// On a miss a single search is run from `start` and every missing connection of that
    /// row that the search reached is stored, so later lookups from `start` are served from the cache.
    /// A pass that fails to rebuild any path of the row stores nothing and reports the requested pair
    /// as unreachable.
    pub fn get_connection(&mut self, start: NodeId, stop: NodeId) -> Result<&Connection> {
        if start == stop {
            return Err(ConnectionError::SelfConnection { vertex: start });
        }

        let source = self.translator.translate(start)?;
        let target = self.translator.translate(stop)?;

        if self.connections.get(source, target).is_none() {
            if let Err(error) = self.fill_row(source) {
                warn!(start, stop, %error, "fill pass failed, no connection stored");
                return Err(ConnectionError::Unreachable { start, stop });
            }
        }
        else {
            trace!(start, stop, "connection served from cache");
        }

        match self.connections.get(source, target) {
            Some(connection) => Ok(connection),
            None => {
                warn!(start, stop, "no path between odd-degree vertices");
                Err(ConnectionError::Unreachable { start, stop })
            }
        }
    }

    /// fills every row that still misses a connection, returns the number of searches that were run
    pub fn populate_all(&mut self) -> Result<usize> {
        let mut passes = 0;

        for source in 0..self.len() {
            let row_complete = self.connections.row(source)
                .iter()
                .enumerate()
                .all(|(target, connection)| target == source || connection.is_some());

            if !row_complete {
                self.fill_row(source)?;
                passes += 1;
            }
        }

        Ok(passes)
    }

    fn fill_row(&mut self, source: usize) -> Result<usize> {
        let start = self.translator.global_id(source);
        let tree = self.engine.compute(self.graph, start);
        self.fill_passes += 1;

        self.fill_from_tree(source, &tree)
    }

    /// stores the connections from source to every reached odd vertex whose cell is still empty
    ///
    /// all paths are reconstructed before the first cell is written, a failing reconstruction
    /// leaves the matrix untouched.
    fn fill_from_tree(&mut self, source: usize, tree: &ShortestPathTree) -> Result<usize> {
        let mut pending: Vec<(usize, Connection)> = Vec::new();

        for target in 0..self.translator.len() {
            if target == source || self.connections.get(source, target).is_some() {
                continue;
            }

            let stop = self.translator.global_id(target);
            if !tree.is_reachable(stop) {
                continue;
            }

            let path = tree.path_to(stop)?;
            pending.push((target, Connection::new(tree.distance(stop), path)));
        }

        let filled = pending.len();

        for (target, connection) in pending {
            self.connections.set(target, source, Some(connection.reversed()));
            self.connections.set(source, target, Some(connection));
        }

        debug!(start = tree.start(), filled, "filled connections from shortest path tree");

        Ok(filled)
    }
}

/// table of the cached costs labelled by global vertex ids, N/A marks connections not computed yet
impl<'g, E: ShortestPathEngine> fmt::Display for ConnectionCache<'g, E> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.odd_vertices().iter().map(|vertex| vertex.to_string()).collect();
        let cells: Vec<String> = self.connections.as_slice()
            .iter()
            .map(|connection| match connection {
                Some(connection) => connection.to_string(),
                None => String::from("N/A"),
            })
            .collect();

        let width = labels.iter().chain(cells.iter()).map(String::len).max().unwrap_or(0);
        let separator = "-".repeat((width + 2) * (labels.len() + 1));

        write!(f, "{:>width$} |", "", width = width)?;
        for label in &labels {
            write!(f, "{:>width$} |", label, width = width)?;
        }

        for (row, label) in labels.iter().enumerate() {
            write!(f, "\n{}\n{:>width$} |", separator, label, width = width)?;

            for cell in &cells[(row * labels.len())..((row + 1) * labels.len())] {
                write!(f, "{:>width$} |", cell, width = width)?;
            }
        }

        Ok(())
    }
}
