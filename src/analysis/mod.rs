pub mod opening;
pub mod outcome;
pub mod types;

pub use opening::{detect_opening_mistake, grade_game, OPENING_WINDOW_PLIES};
pub use outcome::{determine_side, determine_winner};
pub use types::{Grade, OpeningScan, Outcome, PERFECT_GRADE};
