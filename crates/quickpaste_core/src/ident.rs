//! Content-addressed paste identifiers.

/// Length of a paste identifier in hex digits.
pub const PASTE_ID_LEN: usize = 8;

/// Derive the identifier for `content`.
///
/// Identical content always yields the identical id, in every process. Ids
/// are not checked for uniqueness: when two distinct contents truncate to
/// the same id, lookup resolves the first matching record in the collection
/// and deletion removes every matching record. This is an accepted,
/// documented limitation of the short-id scheme.
///
/// # Returns
/// The first 8 hex digits of the blake3 hash of the content bytes.
pub fn paste_id(content: &str) -> String {
    let hash = blake3::hash(content.as_bytes());
    hash.to_hex().as_str()[..PASTE_ID_LEN].to_string()
}
