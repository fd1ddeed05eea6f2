/// Result of a game from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Loss => 'L',
            Outcome::Draw => 'D',
        }
    }
}

/// Result of scanning the opening window of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningScan {
    pub made_mistake: bool,
    /// Full-move number of the last examined ply, 1-indexed
    pub move_number: u32,
}

impl OpeningScan {
    pub fn mistake_move(&self) -> Option<u32> {
        self.made_mistake.then_some(self.move_number)
    }

    pub fn grade(&self) -> Grade {
        match self.mistake_move() {
            Some(move_number) => move_number as Grade,
            None => PERFECT_GRADE,
        }
    }
}

pub type Grade = f64;

/// Grade of a game without an opening mistake
pub const PERFECT_GRADE: Grade = 10.0;
