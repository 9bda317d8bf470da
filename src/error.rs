//! Module error type and host status codes

use thiserror::Error;

/// Errors surfaced while loading a session.
///
/// Once a session is loaded, nothing in the per-frame path can fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unable to allocate sprite batch with capacity {capacity}")]
    BatchAllocation { capacity: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("no session loaded")]
    NotLoaded,

    #[error("host function table is null")]
    NullHost,
}

impl GameError {
    /// Non-zero status code reported to the host
    pub fn status(&self) -> i32 {
        match self {
            GameError::BatchAllocation { .. } => 1,
            GameError::InvalidConfig(_) => 2,
            GameError::ConfigParse(_) => 3,
            GameError::NotLoaded => 4,
            GameError::NullHost => 5,
        }
    }
}

/// Status code for success
pub const STATUS_OK: i32 = 0;
