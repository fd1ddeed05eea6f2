use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Side of the board a player had
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Whether the ply at this 0-based index was played by this side
    pub fn owns_ply(&self, ply_index: usize) -> bool {
        match self {
            Side::White => ply_index % 2 == 0,
            Side::Black => ply_index % 2 == 1,
        }
    }
}

// --- User profile ---

/// Rating snapshot for a single speed category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerfStats {
    #[serde(default)]
    pub games: i32,
    pub rating: i32,
    #[serde(default)]
    pub rd: i32,
    #[serde(default)]
    pub prog: i32,
    #[serde(default)]
    pub prov: bool,
}

/// Entry of the `perfs` map. Storm, racer and streak carry `{runs, score}`
/// instead of a rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Perf {
    Rated(PerfStats),
    Other(serde_json::Value),
}

/// Raw user API response from Lichess
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub perfs: HashMap<String, Perf>,
}

impl User {
    pub fn perf(&self, speed: &str) -> Option<&PerfStats> {
        match self.perfs.get(speed)? {
            Perf::Rated(stats) => Some(stats),
            Perf::Other(_) => None,
        }
    }
}

// --- Games ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightUser {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePlayer {
    /// Absent for AI and anonymous opponents
    #[serde(default)]
    pub user: Option<LightUser>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(rename = "ratingDiff", default)]
    pub rating_diff: Option<i32>,
    #[serde(rename = "aiLevel", default)]
    pub ai_level: Option<u8>,
}

impl GamePlayer {
    pub fn name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// Lichess user names are case-insensitive
    pub fn is_named(&self, username: &str) -> bool {
        self.name()
            .is_some_and(|name| name.eq_ignore_ascii_case(username))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePlayers {
    pub white: GamePlayer,
    pub black: GamePlayer,
}

impl GamePlayers {
    pub fn get(&self, side: Side) -> &GamePlayer {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    #[serde(default)]
    pub eco: Option<String>,
    pub name: String,
    #[serde(default)]
    pub ply: Option<u32>,
}

/// Engine classification of a single move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Judgment {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Judgment {
    pub fn is_mistake_or_worse(&self) -> bool {
        matches!(self.name.as_str(), "Mistake" | "Blunder")
    }
}

/// Post-game evaluation of one ply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveEval {
    #[serde(default)]
    pub eval: Option<i32>,
    #[serde(default)]
    pub mate: Option<i32>,
    #[serde(default)]
    pub best: Option<String>,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub judgment: Option<Judgment>,
}

/// Raw game export record from Lichess
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,
    pub players: GamePlayers,
    #[serde(default)]
    pub winner: Option<Side>,
    #[serde(default)]
    pub opening: Option<Opening>,
    #[serde(default)]
    pub analysis: Option<Vec<MoveEval>>,
    #[serde(default)]
    pub moves: String,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Game {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at_ms).single()
    }

    pub fn opening_name(&self) -> Option<&str> {
        self.opening.as_ref().map(|o| o.name.as_str())
    }
}
