use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use odd_vertex_connections::errors::{ConnectionError, GraphError};
use odd_vertex_connections::graph_algorithms::{all_engines, engine_by_name, ShortestPathEngine};
use odd_vertex_connections::graph_representation::{Graph, GraphList};
use odd_vertex_connections::types::NodeId;
use odd_vertex_connections::utils::{graph_generator::random_connected_graph, io, measure_time};
use odd_vertex_connections::ConnectionCache;

#[derive(Parser)]
struct Opts {

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    Matrix(MatrixCommand),
    Query(QueryCommand),
    Generate(GenerateCommand)
}

/// computes the connections between all odd-degree vertices and prints them as a table
#[derive(Parser)]
struct MatrixCommand {

    /// path to the graph file
    #[clap(short, long)]
    graph_path: String,

    /// name of the shortest path engine
    #[clap(short, long, default_value="linear_scan")]
    algorithm: String
}

/// prints the shortest connection between two odd-degree vertices
#[derive(Parser)]
struct QueryCommand {

    /// path to the graph file
    #[clap(short, long)]
    graph_path: String,

    /// zero based id of the first vertex, as printed by the matrix command
    #[clap(long)]
    start: NodeId,

    /// zero based id of the second vertex
    #[clap(long)]
    stop: NodeId,

    /// name of the shortest path engine
    #[clap(short, long, default_value="linear_scan")]
    algorithm: String
}

/// writes a random connected graph
#[derive(Parser)]
struct GenerateCommand {

    /// path of the created graph file
    #[clap(short, long)]
    output_path: String,

    #[clap(short, long)]
    num_vertices: usize,

    /// number of edges added on top of the spanning tree
    #[clap(short = 'e', long)]
    num_extra_edges: usize,

    /// weights are drawn from 1..=max_weight
    #[clap(short, long, default_value="10")]
    max_weight: u32,

    /// seed for reproducible graphs
    #[clap(short, long)]
    seed: Option<u64>
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("unknown algorithm `{name}`, available algorithms: {available}")]
    UnknownAlgorithm { name: String, available: String },
}

fn main() {
    let opts: Opts = Opts::parse();

    let result = match opts.subcmd {
        SubCommand::Matrix(command) => print_matrix(command),
        SubCommand::Query(command) => print_connection(command),
        SubCommand::Generate(command) => generate_graph(command),
    };

    if let Err(error) = result {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn print_matrix(command: MatrixCommand) -> Result<(), CliError> {
    let graph = load_graph(&command.graph_path)?;
    let engine = select_engine(&command.algorithm)?;
    let mut cache = ConnectionCache::with_engine(&graph, engine);

    let (fill_time, passes) = measure_time(|| cache.populate_all());
    let passes = passes?;

    println!("{}", cache);
    println!("{} searches done. time required: {} microseconds", passes, fill_time.as_micros());

    Ok(())
}

fn print_connection(command: QueryCommand) -> Result<(), CliError> {
    let graph = load_graph(&command.graph_path)?;
    let engine = select_engine(&command.algorithm)?;
    let mut cache = ConnectionCache::with_engine(&graph, engine);

    let connection = cache.get_connection(command.start, command.stop)?;
    println!("{:#}", connection);

    Ok(())
}

fn generate_graph(command: GenerateCommand) -> Result<(), CliError> {
    let mut rng = match command.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let graph = random_connected_graph(&mut rng, command.num_vertices, command.num_extra_edges, command.max_weight)?;
    io::export_graph(&command.output_path, &graph)?;

    println!("graph written. num_vertices: {}, num_edges: {}, odd vertices: {}", graph.vertex_count(), graph.num_edges(), graph.odd_degree_vertices().len());

    Ok(())
}

fn load_graph(path: &String) -> Result<GraphList, CliError> {
    let graph = io::read_graph(path)?;
    println!("graph loaded. num_vertices: {}, num_edges: {}, odd vertices: {}", graph.vertex_count(), graph.num_edges(), graph.odd_degree_vertices().len());

    Ok(graph)
}

fn select_engine(name: &str) -> Result<Box<dyn ShortestPathEngine>, CliError> {
    engine_by_name(name).ok_or_else(|| CliError::UnknownAlgorithm {
        name: name.to_string(),
        available: all_engines().iter().map(|engine| engine.name()).collect::<Vec<_>>().join(", "),
    })
}
