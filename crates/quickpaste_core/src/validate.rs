//! Paste content validation.

use crate::error::ValidationError;

/// Validate submitted paste content.
///
/// Pure predicate: the input is never mutated and no state is touched.
/// The limit counts characters, not bytes.
///
/// # Errors
/// - [`ValidationError::EmptyContent`] when the content is empty or
///   whitespace-only.
/// - [`ValidationError::TooLarge`] when the content exceeds `max_chars`.
pub fn validate_content(content: &str, max_chars: usize) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    if content.chars().count() > max_chars {
        return Err(ValidationError::TooLarge { limit: max_chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_content_at_the_exact_limit() {
        let content = "x".repeat(512);
        assert!(validate_content(&content, 512).is_ok());
    }

    #[test]
    fn rejects_content_one_over_the_limit() {
        let content = "x".repeat(513);
        assert_eq!(
            validate_content(&content, 512),
            Err(ValidationError::TooLarge { limit: 512 })
        );
    }

    #[test]
    fn rejects_empty_and_whitespace_only_content() {
        for content in ["", "   ", "\n\t  \n"] {
            assert_eq!(
                validate_content(content, 512),
                Err(ValidationError::EmptyContent),
                "content: {:?}",
                content
            );
        }
    }

    #[test]
    fn accepts_a_single_character() {
        assert!(validate_content("x", 512).is_ok());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // Four snowmen are 4 chars but 12 bytes.
        assert!(validate_content("☃☃☃☃", 4).is_ok());
        assert_eq!(
            validate_content("☃☃☃☃☃", 4),
            Err(ValidationError::TooLarge { limit: 4 })
        );
    }
}
