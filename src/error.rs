use thiserror::Error;

use crate::services::SnapshotError;

/// Errors surfaced by the command-line entry point
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
