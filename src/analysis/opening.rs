use super::outcome::determine_side;
use super::types::{Grade, OpeningScan};
use crate::domain::Game;
use crate::errors::{ReportError, ReportResult};

/// Plies considered opening theory (8 full moves per side)
pub const OPENING_WINDOW_PLIES: usize = 16;

/// Scan the user's moves in the opening window for the first Mistake or Blunder.
///
/// The move number is `ceil(i / 2) + 1` where `i` is the last examined ply
/// index: the mistake itself, the window end, or the last analysed ply.
pub fn detect_opening_mistake(game: &Game, username: &str) -> ReportResult<OpeningScan> {
    let analysis = match game.analysis.as_deref() {
        Some(analysis) if !analysis.is_empty() => analysis,
        Some(_) => return Err(ReportError::invalid_game(&game.id, "analysis list is empty")),
        None => return Err(ReportError::invalid_game(&game.id, "game has no analysis")),
    };
    let side = determine_side(game, username)?;

    let mut last_index = 0;
    let mut made_mistake = false;
    for (index, eval) in analysis.iter().enumerate() {
        last_index = index;
        if index == OPENING_WINDOW_PLIES {
            break;
        }
        if !side.owns_ply(index) {
            continue;
        }
        if eval.judgment.as_ref().is_some_and(|j| j.is_mistake_or_worse()) {
            made_mistake = true;
            break;
        }
    }

    Ok(OpeningScan {
        made_mistake,
        move_number: full_move_number(last_index),
    })
}

/// Grade a game: the move number of its opening mistake, or 10 when clean
pub fn grade_game(game: &Game, username: &str) -> ReportResult<Grade> {
    detect_opening_mistake(game, username).map(|scan| scan.grade())
}

fn full_move_number(ply_index: usize) -> u32 {
    (ply_index.div_ceil(2) + 1) as u32
}
