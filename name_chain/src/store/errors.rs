//! Session store error types.

use thiserror::Error;

/// Errors raised while loading or saving a game state
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored bytes could not be encoded/decoded
    #[error("Malformed game state: {0}")]
    Codec(#[from] serde_json::Error),

    /// Decoded state breaks the game's invariants
    #[error("Stored game state is inconsistent")]
    Inconsistent,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
