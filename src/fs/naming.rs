//! Checks for text written into a filename.

use crate::error::{Error, Result};

/// Validate the encoded text of one field.
///
/// Rejects path traversal, path separators, null bytes and the characters
/// that are invalid in filenames on common platforms.
pub fn check_field_text(field: &str, text: &str) -> Result<()> {
    let invalid = |message: String| {
        Err(Error::InvalidValue {
            field: field.to_string(),
            message,
        })
    };

    // Reject path traversal attempts
    if text.contains("..") {
        return invalid(format!("path traversal detected: '{}'", text));
    }

    if text.contains('/') || text.contains('\\') {
        return invalid(format!("path separators not allowed: '{}'", text));
    }

    if text.contains('\0') {
        return invalid(format!("null bytes not allowed: '{}'", text.escape_debug()));
    }

    if let Some(c) = text
        .chars()
        .find(|c| matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control())
    {
        return invalid(format!(
            "character '{}' not allowed in '{}'",
            c.escape_debug(),
            text.escape_debug()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text() {
        assert!(check_field_text("band", "VV").is_ok());
        assert!(check_field_text("start_time", "20080101_122333").is_ok());
        assert!(check_field_text("var_name", "SIG0-----").is_ok());
        assert!(check_field_text("band", "").is_ok());
    }

    #[test]
    fn test_path_traversal() {
        assert!(check_field_text("band", "..").is_err());
        assert!(check_field_text("band", "foo/../bar").is_err());
    }

    #[test]
    fn test_path_separators() {
        assert!(check_field_text("band", "a/b").is_err());
        assert!(check_field_text("band", "a\\b").is_err());
    }

    #[test]
    fn test_reserved_characters() {
        assert!(check_field_text("band", "file:name").is_err());
        assert!(check_field_text("band", "a*b").is_err());
        assert!(check_field_text("band", "tab\there").is_err());
        assert!(check_field_text("band", "nul\0").is_err());
    }
}
