use serde::de::DeserializeOwned;

use crate::domain::Game;
use crate::errors::{parse_context, ReportError, ReportResult};

/// Parse a newline-delimited JSON body, skipping blank lines
pub fn parse_lines<T: DeserializeOwned>(body: &str, data_type: &str) -> ReportResult<Vec<T>> {
    body.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|e| {
                let context = format!("{} (line {})", parse_context(data_type), idx + 1);
                ReportError::data_source(context, e)
            })
        })
        .collect()
}

/// Parse the Lichess game export
pub fn parse_games(body: &str) -> ReportResult<Vec<Game>> {
    parse_lines(body, "game export")
}
