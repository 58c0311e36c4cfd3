//! Score store: the single owner of the persisted score record.

use game_core::{Outcome, ScoreRecord};

use crate::error::Result;
use crate::repository::ScoreRepository;

/// Owns the repository holding the singleton [`ScoreRecord`].
///
/// Call [`ScoreStore::ensure_initialized`] once before anything else. Reads
/// are best-effort; writes report failures to the caller, which decides
/// whether they are fatal.
pub struct ScoreStore<R> {
    repo: R,
}

impl<R: ScoreRepository> ScoreStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Guarantee the score row exists, creating it zeroed if absent.
    pub fn ensure_initialized(&self) -> Result<()> {
        self.repo.initialize()?;
        Ok(())
    }

    /// Current score, or [`ScoreRecord::ZERO`] if storage cannot be read.
    pub fn read_score(&self) -> ScoreRecord {
        match self.repo.load() {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Failed to read score, falling back to zero: {}", e);
                ScoreRecord::ZERO
            }
        }
    }

    /// Current score, propagating storage failures.
    pub fn try_read_score(&self) -> Result<ScoreRecord> {
        Ok(self.repo.load()?)
    }

    /// Add one to the counter for `outcome`.
    pub fn record_outcome(&self, outcome: Outcome) -> Result<()> {
        self.repo.increment(outcome)?;
        Ok(())
    }

    /// Add one to the counter named `kind` (`win`, `lose` or `tie`).
    ///
    /// Any other name is rejected with [`StoreError::InvalidOutcome`] and the
    /// record is not touched.
    ///
    /// [`StoreError::InvalidOutcome`]: crate::StoreError::InvalidOutcome
    pub fn record_named(&self, kind: &str) -> Result<()> {
        let outcome: Outcome = kind.parse()?;
        self.record_outcome(outcome)
    }

    /// Zero all three counters.
    pub fn reset(&self) -> Result<()> {
        self.repo.reset()?;
        Ok(())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Release the underlying storage.
    pub fn close(self) -> Result<()> {
        self.repo.close()?;
        Ok(())
    }
}
