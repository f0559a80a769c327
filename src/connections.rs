pub mod connection;
pub mod index_translator;
pub mod connection_cache;

pub use connection::Connection;
pub use connection_cache::ConnectionCache;
pub use index_translator::IndexTranslator;
