//! SQLite-backed ScoreRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{Outcome, ScoreRecord};
use rusqlite::{Connection, OptionalExtension};

use super::{RepositoryError, Result, SCORE_ROW_ID, ScoreRepository};

/// Table holding the singleton score row.
pub const RESULTS: &str = "results";

const CREATE_RESULTS: &str = "CREATE TABLE IF NOT EXISTS results (
    id     INTEGER PRIMARY KEY,
    wins   INTEGER NOT NULL DEFAULT 0,
    losses INTEGER NOT NULL DEFAULT 0,
    ties   INTEGER NOT NULL DEFAULT 0
)";
const SEED_ROW: &str =
    "INSERT OR IGNORE INTO results (id, wins, losses, ties) VALUES (?1, 0, 0, 0)";
const SELECT_ROW: &str = "SELECT wins, losses, ties FROM results WHERE id = ?1";
const RESET_ROW: &str = "UPDATE results SET wins = 0, losses = 0, ties = 0 WHERE id = ?1";

/// Fixed UPDATE statement for each outcome.
///
/// Column names never come from runtime strings.
const fn increment_sql(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "UPDATE results SET wins = wins + 1 WHERE id = ?1",
        Outcome::Lose => "UPDATE results SET losses = losses + 1 WHERE id = ?1",
        Outcome::Tie => "UPDATE results SET ties = ties + 1 WHERE id = ?1",
    }
}

/// File-backed implementation of ScoreRepository.
///
/// Holds one connection for its whole lifetime. Statements run in autocommit
/// mode, so every write is on disk when the call returns. The connection is
/// released by [`ScoreRepository::close`] or, failing that, on drop.
///
/// # File Format
///
/// A regular SQLite database with a single `results` table
/// (`id`, `wins`, `losses`, `ties`) containing the row `id = 1`.
pub struct SqliteScoreRepository {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteScoreRepository {
    /// Open (creating if needed) the database file at `path`.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        tracing::info!("Opened score database at {}", path.display());

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Private database that disappears with the repository.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Location of the database file, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn counter(column: &str, value: Option<i64>) -> Result<u32> {
    // NULL counters read as zero.
    let value = value.unwrap_or(0);
    u32::try_from(value).map_err(|_| {
        RepositoryError::CorruptedData(format!("{column} counter out of range: {value}"))
    })
}

impl ScoreRepository for SqliteScoreRepository {
    fn initialize(&self) -> Result<()> {
        self.conn.execute(CREATE_RESULTS, ())?;
        let inserted = self.conn.execute(SEED_ROW, [SCORE_ROW_ID])?;

        if inserted > 0 {
            tracing::info!("Created score row in `{}`", RESULTS);
        } else {
            tracing::debug!("Score row already present in `{}`", RESULTS);
        }

        Ok(())
    }

    fn load(&self) -> Result<ScoreRecord> {
        let row = self
            .conn
            .query_row(SELECT_ROW, [SCORE_ROW_ID], |row| {
                Ok((
                    row.get::<_, Option<i64>>(0)?,
                    row.get::<_, Option<i64>>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                ))
            })
            .optional()?;

        let (wins, losses, ties) = row.ok_or(RepositoryError::MissingRow(SCORE_ROW_ID))?;

        Ok(ScoreRecord::new(
            counter("wins", wins)?,
            counter("losses", losses)?,
            counter("ties", ties)?,
        ))
    }

    fn increment(&self, outcome: Outcome) -> Result<()> {
        let updated = self.conn.execute(increment_sql(outcome), [SCORE_ROW_ID])?;
        if updated == 0 {
            return Err(RepositoryError::MissingRow(SCORE_ROW_ID));
        }

        tracing::debug!("Recorded {} in score row", outcome);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        let updated = self.conn.execute(RESET_ROW, [SCORE_ROW_ID])?;
        if updated == 0 {
            return Err(RepositoryError::MissingRow(SCORE_ROW_ID));
        }

        tracing::debug!("Reset score row");
        Ok(())
    }

    fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| RepositoryError::Sqlite(e))?;
        tracing::info!("Closed score database");
        Ok(())
    }
}
