//! Runtime configuration structures and loaders.

use std::env;
use std::path::PathBuf;

/// File name of the score database.
pub const DATABASE_FILE: &str = "RockPaperScissors.db";

/// Application name used for platform directories.
pub const APP_NAME: &str = "rock-paper-scissors";

/// Runtime configuration.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub storage: StorageConfig,
    /// Fixed opponent seed; `None` draws from OS entropy.
    pub opponent_seed: Option<u64>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RPS_DATABASE_PATH` - Score database file (default: platform data dir)
    /// - `RPS_SEED` - Deterministic opponent seed (default: unset)
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            opponent_seed: read_env::<u64>("RPS_SEED"),
        }
    }
}

/// Where the score database lives.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub database_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StorageConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    pub fn from_env() -> Self {
        match env::var_os("RPS_DATABASE_PATH") {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

/// Platform data directory for the score database.
///
/// - macOS: `~/Library/Application Support/rock-paper-scissors`
/// - Linux: `~/.local/share/rock-paper-scissors` (or `$XDG_DATA_HOME/...`)
/// - Windows: `%APPDATA%\rock-paper-scissors\data`
/// - Fallback: the working directory
pub fn default_database_path() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
