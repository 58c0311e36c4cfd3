//! Deterministic round rules shared by the runtime and the client.
//!
//! `game-core` defines the canonical rules of Rock-Paper-Scissors and exposes
//! pure APIs with no persistence or terminal concerns:
//! - [`Choice`] and the cyclic beats-relation
//! - [`Outcome`] and [`resolve`], the player-perspective result of a round
//! - [`OpponentSource`], the seam through which the computer picks a move
//! - [`ScoreRecord`], the win/loss/tie counter value
pub mod choice;
pub mod error;
pub mod opponent;
pub mod outcome;
pub mod score;

pub use choice::Choice;
pub use error::ParseOutcomeError;
pub use opponent::{OpponentSource, RandomOpponent, ScriptedOpponent};
pub use outcome::{Outcome, resolve};
pub use score::ScoreRecord;
