//! Shared constants used across QuickPaste crates.

/// Default API port for QuickPaste.
pub const DEFAULT_PORT: u16 = 5002;

/// Default maximum paste size in characters.
pub const DEFAULT_MAX_PASTE_SIZE: usize = 50_000;

/// Default number of pastes per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// File name of the persisted paste document.
pub const PASTE_FILE_NAME: &str = "pastes.json";

/// `created_at` format: sortable text with second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
