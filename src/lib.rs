extern crate rand;
extern crate thiserror;

pub mod types;
pub mod errors;

pub mod graph_representation;
pub mod graph_algorithms;
pub mod utils;

pub mod connections;

pub use connections::{Connection, ConnectionCache};
pub use errors::{ConnectionError, GraphError};
pub use utils::data_structures;
