//! Error types for SpinPick

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum SpError {
    #[error("Catalog is empty")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type SpResult<T> = Result<T, SpError>;
