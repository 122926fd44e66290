//! Error types for CRUD da Justica

use thiserror::Error;

/// General application error type
#[derive(Debug, Error)]
pub enum JusticaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JusticaError>;
