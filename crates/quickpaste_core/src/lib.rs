//! Core domain library for QuickPaste (config, storage, models).

/// Configuration loading and defaults.
pub mod config;
/// Shared default values.
pub mod constants;
/// Heuristic language detection.
pub mod detection;
/// Application error types (storage/domain).
pub mod error;
/// Content-addressed paste identifiers.
pub mod ident;
/// Data models for API requests and persistence.
pub mod models;
/// Durable paste store.
pub mod store;
/// Paste content validation.
pub mod validate;

pub use config::Config;
pub use constants::{DEFAULT_MAX_PASTE_SIZE, DEFAULT_PAGE_SIZE, DEFAULT_PORT};
pub use error::{AppError, ValidationError};
pub use store::PasteStore;
