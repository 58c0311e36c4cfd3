//! Opponent move sources.
//!
//! The computer's move is drawn through [`OpponentSource`] so the resolver
//! never touches a random number generator directly. Production code uses
//! [`RandomOpponent`]; tests and demos substitute [`ScriptedOpponent`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Choice;

/// Supplies the computer's move for each round.
pub trait OpponentSource {
    /// Pick the next move.
    fn choose(&mut self) -> Choice;
}

/// Samples uniformly from the three choices.
#[derive(Clone, Debug)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<StdRng> {
    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OpponentSource for RandomOpponent<R> {
    fn choose(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range(0..Choice::ALL.len())]
    }
}

/// Replays a fixed sequence of moves, starting over when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    moves: Vec<Choice>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// An empty script falls back to always playing Rock.
    pub fn new(moves: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Always plays `choice`.
    pub fn always(choice: Choice) -> Self {
        Self::new([choice])
    }
}

impl OpponentSource for ScriptedOpponent {
    fn choose(&mut self) -> Choice {
        if self.moves.is_empty() {
            return Choice::Rock;
        }
        let choice = self.moves[self.cursor % self.moves.len()];
        self.cursor = self.cursor.wrapping_add(1);
        choice
    }
}

impl<T: OpponentSource + ?Sized> OpponentSource for Box<T> {
    fn choose(&mut self) -> Choice {
        (**self).choose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_opponent_is_reproducible() {
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);
        let first: Vec<_> = (0..32).map(|_| a.choose()).collect();
        let second: Vec<_> = (0..32).map(|_| b.choose()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn random_opponent_covers_every_choice() {
        let mut opponent = RandomOpponent::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let index = Choice::ALL
                .iter()
                .position(|c| *c == opponent.choose())
                .unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn scripted_opponent_cycles() {
        let mut opponent = ScriptedOpponent::new([Choice::Paper, Choice::Scissors]);
        assert_eq!(opponent.choose(), Choice::Paper);
        assert_eq!(opponent.choose(), Choice::Scissors);
        assert_eq!(opponent.choose(), Choice::Paper);
    }

    #[test]
    fn empty_script_plays_rock() {
        let mut opponent = ScriptedOpponent::new(Vec::new());
        assert_eq!(opponent.choose(), Choice::Rock);
    }

    #[test]
    fn boxed_source_delegates() {
        let mut opponent: Box<dyn OpponentSource> =
            Box::new(ScriptedOpponent::always(Choice::Scissors));
        assert_eq!(opponent.choose(), Choice::Scissors);
    }
}
