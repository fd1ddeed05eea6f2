//! Game builders shared by the unit tests

use std::collections::HashMap;

use super::models::{
    Game, GamePlayer, GamePlayers, Judgment, LightUser, MoveEval, Opening, Perf, PerfStats, Side,
    User,
};

pub const ME: &str = "Magnus";
pub const OPPONENT: &str = "Hikaru";

pub fn user(rating: i32, prog: i32) -> User {
    let mut perfs = HashMap::new();
    perfs.insert(
        "blitz".to_string(),
        Perf::Rated(PerfStats {
            rating,
            prog,
            ..Default::default()
        }),
    );
    User {
        id: ME.to_lowercase(),
        username: ME.to_string(),
        perfs,
    }
}

fn player(name: &str) -> GamePlayer {
    GamePlayer {
        user: Some(LightUser {
            name: name.to_string(),
            id: Some(name.to_lowercase()),
        }),
        rating: Some(1500),
        rating_diff: None,
        ai_level: None,
    }
}

/// Analysis of `plies` clean moves
pub fn clean_analysis(plies: usize) -> Vec<MoveEval> {
    vec![MoveEval::default(); plies]
}

/// Analysis of `plies` moves with the given judgments at the given indices
pub fn analysis_with(plies: usize, judgments: &[(usize, &str)]) -> Vec<MoveEval> {
    let mut analysis = clean_analysis(plies);
    for &(index, name) in judgments {
        analysis[index].judgment = Some(Judgment {
            name: name.to_string(),
            comment: None,
        });
    }
    analysis
}

pub struct GameBuilder {
    game: Game,
}

impl GameBuilder {
    /// A game with the default user playing `side`
    pub fn new(side: Side) -> Self {
        let players = match side {
            Side::White => GamePlayers {
                white: player(ME),
                black: player(OPPONENT),
            },
            Side::Black => GamePlayers {
                white: player(OPPONENT),
                black: player(ME),
            },
        };
        Self {
            game: Game {
                id: "game0001".to_string(),
                created_at_ms: 0,
                players,
                winner: None,
                opening: None,
                analysis: Some(clean_analysis(40)),
                moves: String::new(),
                speed: Some("blitz".to_string()),
                status: Some("mate".to_string()),
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.game.id = id.to_string();
        self
    }

    pub fn created_at_ms(mut self, ms: i64) -> Self {
        self.game.created_at_ms = ms;
        self
    }

    pub fn winner(mut self, side: Side) -> Self {
        self.game.winner = Some(side);
        self
    }

    pub fn opening(mut self, name: &str) -> Self {
        self.game.opening = Some(Opening {
            eco: None,
            name: name.to_string(),
            ply: None,
        });
        self
    }

    pub fn analysis(mut self, analysis: Vec<MoveEval>) -> Self {
        self.game.analysis = Some(analysis);
        self
    }

    pub fn no_analysis(mut self) -> Self {
        self.game.analysis = None;
        self
    }

    pub fn build(self) -> Game {
        self.game
    }
}
