//! Assembles a ready-to-play controller from configuration.

use game_core::RandomOpponent;

use crate::config::RuntimeConfig;
use crate::controller::GameController;
use crate::error::Result;
use crate::repository::SqliteScoreRepository;
use crate::store::ScoreStore;

/// Controller backed by the score database and a random opponent.
pub type SqliteController = GameController<SqliteScoreRepository, RandomOpponent>;

/// Builder for the production [`GameController`].
///
/// `build()` opens the database and ensures the score row exists. Any error
/// it returns means persistence is unavailable; callers treat that as fatal.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: Option<RuntimeConfig>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (defaults to [`RuntimeConfig::default`]).
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<SqliteController> {
        let config = self.config.unwrap_or_default();

        let repo = SqliteScoreRepository::open(&config.storage.database_path)?;
        let store = ScoreStore::new(repo);
        store.ensure_initialized()?;

        let opponent = match config.opponent_seed {
            Some(seed) => {
                tracing::info!("Opponent seeded with {}", seed);
                RandomOpponent::seeded(seed)
            }
            None => RandomOpponent::from_entropy(),
        };

        Ok(GameController::new(store, opponent))
    }
}
