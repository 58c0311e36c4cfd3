//! Repository contract for the singleton score row.

use game_core::{Outcome, ScoreRecord};

use super::Result;

/// Durable storage for the single [`ScoreRecord`].
///
/// Every mutating call must be persisted before it returns. Implementations
/// do not cache or batch writes.
pub trait ScoreRepository: Send {
    /// Create the backing table and the zeroed score row if either is absent.
    ///
    /// Safe to call repeatedly; an existing row is left untouched.
    fn initialize(&self) -> Result<()>;

    /// Read the current counters.
    fn load(&self) -> Result<ScoreRecord>;

    /// Advance the counter matching `outcome` by exactly one.
    fn increment(&self, outcome: Outcome) -> Result<()>;

    /// Set all three counters to zero.
    fn reset(&self) -> Result<()>;

    /// Release the underlying resource.
    fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}
