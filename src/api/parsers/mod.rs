pub mod ndjson;

pub use ndjson::parse_games;
