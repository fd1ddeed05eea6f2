use std::collections::HashMap;
use std::fmt;

use log::warn;

use crate::analysis::{grade_game, Grade, PERFECT_GRADE};
use crate::domain::Game;

/// Aggregated grade of one opening
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningGrade {
    pub name: String,
    pub count: usize,
    pub grade: Grade,
}

#[derive(Debug, Clone)]
struct GradeAccumulator {
    name: String,
    count: usize,
    total: Grade,
}

/// Per-opening grades in first-encounter order
#[derive(Debug, Default)]
pub struct OpeningGrades {
    groups: Vec<GradeAccumulator>,
    index: HashMap<String, usize>,
}

impl OpeningGrades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grade every game with a named opening; unusable games are skipped
    pub fn from_games(games: &[Game], username: &str) -> Self {
        let mut grades = Self::new();
        for game in games {
            let Some(name) = game.opening_name() else {
                continue;
            };
            match grade_game(game, username) {
                Ok(grade) => grades.add(name, grade),
                Err(e) => warn!("Skipping game {} in opening grades: {}", game.id, e),
            }
        }
        grades
    }

    pub fn add(&mut self, name: &str, grade: Grade) {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.groups.push(GradeAccumulator {
                    name: name.to_string(),
                    count: 0,
                    total: 0.0,
                });
                self.index.insert(name.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[idx];
        group.count += 1;
        group.total += grade;
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn all(&self) -> Vec<OpeningGrade> {
        self.groups
            .iter()
            .map(|g| OpeningGrade {
                name: g.name.clone(),
                count: g.count,
                grade: g.total / g.count as Grade,
            })
            .collect()
    }

    /// Openings played at least `min_played` times with room for improvement
    pub fn needing_work(&self, min_played: usize) -> Vec<OpeningGrade> {
        self.all()
            .into_iter()
            .filter(|g| g.count >= min_played && g.grade < PERFECT_GRADE)
            .collect()
    }
}

/// Text table with columns Opening, Count, Grade
pub struct GradeTable<'a>(pub &'a [OpeningGrade]);

impl fmt::Display for GradeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|g| g.name.chars().count())
            .chain(std::iter::once("Opening".len()))
            .max()
            .unwrap_or_default();

        write!(f, "{:<width$}  {:>5}  {:>5}", "Opening", "Count", "Grade")?;
        for row in self.0 {
            write!(f, "\n{:<width$}  {:>5}  {:>5.1}", row.name, row.count, row.grade)?;
        }
        Ok(())
    }
}

/// Openings worth studying across the historical batch
pub fn historical_grade_report(games: &[Game], username: &str, min_played: usize) -> String {
    let rows = OpeningGrades::from_games(games, username).needing_work(min_played);
    if rows.is_empty() {
        return format!("No openings played {} or more times need work.", min_played);
    }
    format!("Opening grades:\n{}", GradeTable(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{analysis_with, GameBuilder, ME};
    use crate::domain::Side;

    fn queens_gambit_pair() -> Vec<Game> {
        vec![
            GameBuilder::new(Side::White).opening("Queen's Gambit").build(),
            GameBuilder::new(Side::White)
                .opening("Queen's Gambit")
                .analysis(analysis_with(40, &[(6, "Mistake")]))
                .build(),
        ]
    }

    #[test]
    fn test_mean_grade_of_two_games() {
        let rows = OpeningGrades::from_games(&queens_gambit_pair(), ME).needing_work(2);
        assert_eq!(
            rows,
            vec![OpeningGrade {
                name: "Queen's Gambit".to_string(),
                count: 2,
                grade: 7.0,
            }]
        );
    }

    #[test]
    fn test_min_played_filter() {
        let games = queens_gambit_pair();
        assert!(OpeningGrades::from_games(&games, ME).needing_work(3).is_empty());
        assert!(!historical_grade_report(&games, ME, 3).contains("Queen's Gambit"));
    }

    #[test]
    fn test_perfect_openings_are_excluded() {
        let games = vec![
            GameBuilder::new(Side::White).opening("London System").build(),
            GameBuilder::new(Side::White).opening("London System").build(),
        ];
        let grades = OpeningGrades::from_games(&games, ME);
        assert_eq!(grades.len(), 1);
        assert!(grades.needing_work(0).is_empty());
        assert!(grades.needing_work(1).is_empty());
    }

    #[test]
    fn test_groups_keep_first_encounter_order() {
        let mut grades = OpeningGrades::new();
        grades.add("Sicilian Defense", 4.0);
        grades.add("French Defense", 2.0);
        grades.add("Sicilian Defense", 6.0);

        let names: Vec<String> = grades.needing_work(1).into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Sicilian Defense", "French Defense"]);
    }

    #[test]
    fn test_games_without_opening_or_analysis_are_skipped() {
        let games = vec![
            GameBuilder::new(Side::White).build(),
            GameBuilder::new(Side::White).opening("Italian Game").no_analysis().build(),
        ];
        assert!(OpeningGrades::from_games(&games, ME).is_empty());
    }

    #[test]
    fn test_report_table() {
        let report = historical_grade_report(&queens_gambit_pair(), ME, 2);
        assert_eq!(
            report,
            "Opening grades:\n\
             Opening         Count  Grade\n\
             Queen's Gambit      2    7.0"
        );
    }

    #[test]
    fn test_report_without_rows() {
        assert_eq!(
            historical_grade_report(&[], ME, 2),
            "No openings played 2 or more times need work."
        );
    }
}
