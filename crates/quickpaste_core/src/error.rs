//! Application error types for core storage and domain logic.
use thiserror::Error;

/// Rejection reasons for submitted paste content.
///
/// These are caller-facing: the display strings are the exact reasons
/// surfaced to clients, so they stay human-readable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Content too large. Maximum size is {limit} characters")]
    TooLarge { limit: usize },
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    StorageMessage(String),
}
