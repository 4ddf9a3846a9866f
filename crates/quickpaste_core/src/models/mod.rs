//! Data models shared between the store and the HTTP layer.

/// Paste record and request payloads.
pub mod paste;
