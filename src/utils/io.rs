//! reading and writing undirected graphs in a dimacs like text format
//!
//! ```text
//! c optional comment lines
//! p edge <num vertices> <num edges>
//! e <start> <end> <weight>
//! ```
//!
//! vertex ids inside the file are one based.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::GraphError;
use crate::graph_representation::{Graph, GraphList};
use crate::types::*;

pub fn read_graph(path: &dyn AsRef<Path>) -> Result<GraphList, GraphError> {
    let path: &Path = path.as_ref();
    let file = File::open(path)?;
    let graph = parse_graph(BufReader::new(file))?;

    debug!(path = %path.display(), num_vertices = graph.vertex_count(), num_edges = graph.num_edges(), "graph loaded");

    Ok(graph)
}

pub fn parse_graph(reader: impl BufRead) -> Result<GraphList, GraphError> {
    let mut graph: Option<GraphList> = None;
    let mut expected_edges: usize = 0;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let line = line.trim();

        if line.is_empty() || is_comment_line(line) {
            continue;
        }

        let split = line.split_whitespace().collect::<Vec<&str>>();

        if is_header_line(line) {
            if graph.is_some() {
                return Err(parse_error(line_number, "duplicate `p edge` header"));
            }

            let num_vertices: usize = parse_field(&split, 2, line_number)?;
            expected_edges = parse_field(&split, 3, line_number)?;

            graph = Some(GraphList::new(num_vertices));
        }
        else if is_edge_line(line) {
            let graph = graph.as_mut().ok_or(GraphError::MissingHeader)?;

            let start = to_zero_based(parse_field(&split, 1, line_number)?, line_number)?;
            let end = to_zero_based(parse_field(&split, 2, line_number)?, line_number)?;
            let weight: Weight = parse_field(&split, 3, line_number)?;

            graph.add_edge(start, end, weight)?;
        }
        else {
            return Err(parse_error(line_number, &format!("unknown line `{}`", line)));
        }
    }

    let graph = graph.ok_or(GraphError::MissingHeader)?;

    if graph.num_edges() != expected_edges {
        warn!(expected_edges, num_edges = graph.num_edges(), "edge count differs from the graph header");
    }

    Ok(graph)
}

pub fn export_graph(path: &dyn AsRef<Path>, graph: &GraphList) -> Result<(), GraphError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_graph(&mut writer, graph)?;
    writer.flush()?;

    Ok(())
}

/// writes every undirected edge once
pub fn write_graph(mut writer: impl Write, graph: &GraphList) -> Result<(), GraphError> {
    writeln!(writer, "p edge {} {}", graph.vertex_count(), graph.num_edges())?;

    for (start, end, weight) in graph.edges() {
        writeln!(writer, "e {} {} {}", start + 1, end + 1, weight)?;
    }

    Ok(())
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('c')
}

fn is_header_line(line: &str) -> bool {
    line.starts_with("p edge")
}

fn is_edge_line(line: &str) -> bool {
    line.starts_with("e ")
}

fn parse_field<T: std::str::FromStr>(split: &[&str], index: usize, line_number: usize) -> Result<T, GraphError> {
    let field = split.get(index)
        .ok_or_else(|| parse_error(line_number, &format!("missing field {}", index)))?;

    field.parse()
        .map_err(|_| parse_error(line_number, &format!("invalid value `{}`", field)))
}

fn to_zero_based(vertex: NodeId, line_number: usize) -> Result<NodeId, GraphError> {
    vertex.checked_sub(1)
        .ok_or_else(|| parse_error(line_number, "vertex ids start at 1"))
}

fn parse_error(line: usize, message: &str) -> GraphError {
    GraphError::Parse { line, message: message.to_string() }
}
