//! Game errors
//!
//! The only way a game can fail is a bad data source at startup. Everything
//! after that is a total function over the session state.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("tweet pool is empty, nothing to play")]
    EmptyPool,
    #[error("a session needs at least one round (got {0})")]
    InvalidRoundCount(usize),
    #[error("tweet data not found: {}", path.display())]
    DataNotFound { path: PathBuf },
    #[error("failed to read tweet data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tweet data: {0}")]
    Parse(#[from] serde_json::Error),
}
