//! Win/loss/tie counter value.

use std::fmt;

use crate::Outcome;

/// Snapshot of the persisted score.
///
/// Only the store mutates the persisted copy; everything else works with
/// values read back from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScoreRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl ScoreRecord {
    pub const ZERO: ScoreRecord = ScoreRecord::new(0, 0, 0);

    pub const fn new(wins: u32, losses: u32, ties: u32) -> Self {
        Self { wins, losses, ties }
    }

    /// Counter for a single outcome.
    pub const fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
            Outcome::Tie => self.ties,
        }
    }

    /// Copy with the counter for `outcome` advanced by one.
    pub const fn incremented(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::new(self.wins.saturating_add(1), self.losses, self.ties),
            Outcome::Lose => Self::new(self.wins, self.losses.saturating_add(1), self.ties),
            Outcome::Tie => Self::new(self.wins, self.losses, self.ties.saturating_add(1)),
        }
    }

    /// Rounds played since the last reset.
    pub const fn total(&self) -> u64 {
        self.wins as u64 + self.losses as u64 + self.ties as u64
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {} | Losses: {} | Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_score_line() {
        assert_eq!(
            ScoreRecord::new(3, 1, 2).to_string(),
            "Wins: 3 | Losses: 1 | Ties: 2"
        );
        assert_eq!(ScoreRecord::ZERO.to_string(), "Wins: 0 | Losses: 0 | Ties: 0");
    }

    #[test]
    fn increments_only_the_matching_field() {
        let score = ScoreRecord::ZERO.incremented(Outcome::Lose);
        assert_eq!(score, ScoreRecord::new(0, 1, 0));
        assert_eq!(score.get(Outcome::Lose), 1);
        assert_eq!(score.get(Outcome::Win), 0);
        assert_eq!(score.total(), 1);
    }
}
