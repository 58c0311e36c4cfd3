//! Error types for game-core.

use thiserror::Error;

/// Raised when a textual outcome name is not one of `win`, `lose`, `tie`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid outcome: {0:?} (expected win, lose or tie)")]
pub struct ParseOutcomeError(pub String);
