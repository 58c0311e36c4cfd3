//! Runtime orchestration for a Rock-Paper-Scissors session.
//!
//! This crate wires the pure rules from `game-core` to durable score storage
//! and exposes the controller that UI layers drive one event at a time.
//!
//! Modules are organized by responsibility:
//! - [`repository`] persists the singleton score row (SQLite or in-memory)
//! - [`store`] is the score component with best-effort reads
//! - [`controller`] plays rounds, resets, and keeps the display texts
//! - [`config`] and [`builder`] assemble a controller from the environment
pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod repository;
pub mod store;

pub use builder::{RuntimeBuilder, SqliteController};
pub use config::{RuntimeConfig, StorageConfig};
pub use controller::{GameController, RESET_TEXT, RoundReport, WELCOME_TEXT};
pub use error::{Result, StoreError};
pub use repository::{
    InMemoryScoreRepo, RepositoryError, SCORE_ROW_ID, ScoreRepository, SqliteScoreRepository,
};
pub use store::ScoreStore;
