use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};
use log::warn;

use crate::analysis::{detect_opening_mistake, determine_winner, Outcome};
use crate::domain::Game;

#[derive(Debug, Clone, PartialEq)]
struct OpeningLine {
    name: String,
    outcome: Outcome,
    mistake_move: Option<u32>,
}

impl fmt::Display for OpeningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}), ", self.name, self.outcome.letter())?;
        match self.mistake_move {
            Some(move_number) => write!(f, "opening mistake in move {}", move_number),
            None => write!(f, "no opening mistake"),
        }
    }
}

/// Games played on the day before the reference time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YesterdaySummary {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    openings: Vec<OpeningLine>,
}

impl YesterdaySummary {
    pub fn from_games<Tz: TimeZone>(games: &[Game], username: &str, now: &DateTime<Tz>) -> Self {
        let mut summary = Self::default();
        let Some(yesterday) = now.date_naive().pred_opt() else {
            return summary;
        };

        for game in games {
            if played_on(game, &now.timezone()) != Some(yesterday) {
                continue;
            }
            summary.add(game, username);
        }

        summary.sort_openings();
        summary
    }

    fn add(&mut self, game: &Game, username: &str) {
        let outcome = determine_winner(game, username);
        self.played += 1;
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Loss => self.lost += 1,
            Outcome::Draw => {}
        }

        let Some(name) = game.opening_name() else {
            return;
        };
        match detect_opening_mistake(game, username) {
            Ok(scan) => self.openings.push(OpeningLine {
                name: name.to_string(),
                outcome,
                mistake_move: scan.mistake_move(),
            }),
            Err(e) => warn!("Skipping opening of game {}: {}", game.id, e),
        }
    }

    /// Mistakes first by move number, then clean games in encounter order
    fn sort_openings(&mut self) {
        self.openings
            .sort_by_key(|line| (line.mistake_move.is_none(), line.mistake_move));
    }
}

impl fmt::Display for YesterdaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Played {} games yesterday, won {}, lost {}.",
            self.played, self.won, self.lost
        )?;
        writeln!(f)?;
        writeln!(f, "Openings played:")?;
        let lines: Vec<String> = self.openings.iter().map(|line| line.to_string()).collect();
        write!(f, "{}", lines.join(",\n\n"))
    }
}

/// Summary of yesterday's games relative to `now`, in `now`'s timezone
pub fn yesterday_report<Tz: TimeZone>(
    games: &[Game],
    username: &str,
    now: &DateTime<Tz>,
) -> String {
    YesterdaySummary::from_games(games, username, now).to_string()
}

fn played_on<Tz: TimeZone>(game: &Game, tz: &Tz) -> Option<NaiveDate> {
    game.created_at()
        .map(|created| created.with_timezone(tz).date_naive())
}
