//! Error types shared across the workspace

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum NicheError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NicheError {
    pub fn config(msg: impl Into<String>) -> Self {
        NicheError::Config(msg.into())
    }
}

/// Result type alias for core operations
pub type NicheResult<T> = Result<T, NicheError>;
