pub mod models;

#[cfg(test)]
pub mod fixtures;

pub use models::{
    Game, GamePlayer, GamePlayers, Judgment, LightUser, MoveEval, Opening, Perf, PerfStats, Side,
    User,
};
