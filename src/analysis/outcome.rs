use super::types::Outcome;
use crate::domain::{Game, Side};
use crate::errors::{ReportError, ReportResult};

/// Determine the result of a game for `username`. No declared winner is a draw.
pub fn determine_winner(game: &Game, username: &str) -> Outcome {
    match game.winner {
        None => Outcome::Draw,
        Some(side) if game.players.get(side).is_named(username) => Outcome::Win,
        Some(_) => Outcome::Loss,
    }
}

/// Determine which side `username` played. White wins if both sides match.
pub fn determine_side(game: &Game, username: &str) -> ReportResult<Side> {
    [Side::White, Side::Black]
        .into_iter()
        .find(|&side| game.players.get(side).is_named(username))
        .ok_or_else(|| {
            ReportError::invalid_game(&game.id, format!("{} did not play this game", username))
        })
}
