use std::io;

use thiserror::Error;

/// Failures while loading [`crate::config::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failures of a leaderboard store.
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard storage error: {0}")]
    Io(#[from] io::Error),
    #[error("leaderboard file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
