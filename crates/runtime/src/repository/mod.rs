//! Repository layer for the persisted score.
//!
//! Exactly one score row exists. Repositories create it on
//! [`ScoreRepository::initialize`] and afterwards only read, increment or
//! zero it; the row is never deleted.

mod error;
mod memory;
mod sqlite;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryScoreRepo;
pub use sqlite::SqliteScoreRepository;
pub use traits::ScoreRepository;

/// Primary key of the singleton score row.
pub const SCORE_ROW_ID: i64 = 1;
