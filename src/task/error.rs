//! Task store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before the collection was touched.
    #[error("{0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    NotFound(u64),

    /// The tasks file exists but does not hold valid task JSON.
    #[error("Failed to parse tasks file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
