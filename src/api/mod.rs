pub mod lichess_client;
pub mod parsers;
pub mod query;

pub use lichess_client::LichessClient;
pub use query::GameQuery;
