//! Round outcome and the resolver that produces it.

use std::str::FromStr;

use crate::{Choice, ParseOutcomeError};

/// Result of one round from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Lose, Outcome::Tie];

    /// Sentence shown to the player after a round.
    pub const fn phrase(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    /// Accepts only the canonical names `win`, `lose` and `tie`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Outcome::Win),
            "lose" => Ok(Outcome::Lose),
            "tie" => Ok(Outcome::Tie),
            other => Err(ParseOutcomeError(other.to_owned())),
        }
    }
}

/// Decide the round between `player` and `opponent`.
pub fn resolve(player: Choice, opponent: Choice) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
