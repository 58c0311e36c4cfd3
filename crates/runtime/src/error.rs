//! Errors surfaced by the score store.

use game_core::ParseOutcomeError;
use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    InvalidOutcome(#[from] ParseOutcomeError),
}

impl StoreError {
    /// Returns true for rejected caller input, as opposed to storage failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidOutcome(_))
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
