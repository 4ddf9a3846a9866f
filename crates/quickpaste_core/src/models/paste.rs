//! Paste record and request payloads.

use crate::detection::detect_language;
use serde::{Deserialize, Serialize};

/// A stored paste: the sole persisted entity.
///
/// `created_at` is kept as formatted text (`"YYYY-MM-DD HH:MM:SS"`, UTC)
/// because that is the persisted wire format; `size` is the character count
/// of `content`, computed once at creation and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paste {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    pub language: Option<String>,
    pub created_at: String,
    pub size: usize,
}

/// Request payload for creating a paste (JSON API and HTML form).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePasteRequest {
    pub content: String,
    pub title: Option<String>,
    pub language: Option<String>,
}

/// Normalize a display title: trimmed, with blank input treated as absent.
///
/// # Returns
/// The trimmed title when non-empty, otherwise `None`.
pub fn normalize_title(title: Option<&str>) -> Option<String> {
    title
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Resolve the stored language tag from the submitted value.
///
/// An explicit tag wins unless it is blank or the `"auto"` sentinel, in
/// which case detection decides (and may still come up empty).
pub fn resolve_language(content: &str, requested: Option<&str>) -> Option<String> {
    match requested.map(str::trim) {
        Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case("auto") => {
            Some(value.to_string())
        }
        _ => detect_language(content).map(str::to_string),
    }
}
