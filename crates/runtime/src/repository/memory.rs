//! In-memory ScoreRepository implementation for tests and local runs.

use std::sync::Mutex;

use game_core::{Outcome, ScoreRecord};

use super::{RepositoryError, Result, SCORE_ROW_ID, ScoreRepository};

/// In-memory implementation of ScoreRepository.
///
/// Mirrors the SQLite semantics: the row does not exist until
/// [`ScoreRepository::initialize`] is called.
#[derive(Debug, Default)]
pub struct InMemoryScoreRepo {
    row: Mutex<Option<ScoreRecord>>,
}

impl InMemoryScoreRepo {
    /// Create a repository with no score row yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing score row.
    pub fn with_record(record: ScoreRecord) -> Self {
        Self {
            row: Mutex::new(Some(record)),
        }
    }

    fn update(&self, f: impl FnOnce(ScoreRecord) -> ScoreRecord) -> Result<()> {
        let mut row = self.row.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let current = (*row).ok_or(RepositoryError::MissingRow(SCORE_ROW_ID))?;
        *row = Some(f(current));
        Ok(())
    }
}

impl ScoreRepository for InMemoryScoreRepo {
    fn initialize(&self) -> Result<()> {
        let mut row = self.row.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        row.get_or_insert(ScoreRecord::ZERO);
        Ok(())
    }

    fn load(&self) -> Result<ScoreRecord> {
        let row = self.row.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        (*row).ok_or(RepositoryError::MissingRow(SCORE_ROW_ID))
    }

    fn increment(&self, outcome: Outcome) -> Result<()> {
        self.update(|record| record.incremented(outcome))
    }

    fn reset(&self) -> Result<()> {
        self.update(|_| ScoreRecord::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_is_absent_until_initialized() {
        let repo = InMemoryScoreRepo::new();
        assert!(matches!(repo.load(), Err(RepositoryError::MissingRow(_))));

        repo.initialize().unwrap();
        assert_eq!(repo.load().unwrap(), ScoreRecord::ZERO);
    }

    #[test]
    fn initialize_preserves_existing_record() {
        let repo = InMemoryScoreRepo::with_record(ScoreRecord::new(2, 3, 4));
        repo.initialize().unwrap();
        assert_eq!(repo.load().unwrap(), ScoreRecord::new(2, 3, 4));
    }

    #[test]
    fn increment_and_reset() {
        let repo = InMemoryScoreRepo::new();
        repo.initialize().unwrap();

        repo.increment(Outcome::Tie).unwrap();
        repo.increment(Outcome::Win).unwrap();
        assert_eq!(repo.load().unwrap(), ScoreRecord::new(1, 0, 1));

        repo.reset().unwrap();
        assert_eq!(repo.load().unwrap(), ScoreRecord::ZERO);
    }
}
