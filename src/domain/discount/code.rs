//! Discount code matching key.
//!
//! The key a customer types at checkout (e.g. "SAVE10"). Matching is
//! case-insensitive: keys are normalized to uppercase on construction and
//! stored normalized, so "save10" and "SAVE10" locate the same record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A normalized discount code key.
///
/// # Validation Rules
///
/// - 3 to 32 characters after trimming
/// - ASCII letters, digits, hyphens, and underscores only
/// - Stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeKey(String);

impl CodeKey {
    /// Creates a CodeKey from raw input, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the trimmed input is empty, outside the
    /// 3-32 character range, or contains characters other than ASCII
    /// alphanumerics, hyphens, and underscores.
    pub fn try_new(code: &str) -> Result<Self, ValidationError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("code"));
        }

        if trimmed.len() < 3 || trimmed.len() > 32 {
            return Err(ValidationError::out_of_range(
                "code_length",
                3,
                32,
                trimmed.len() as i64,
            ));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "code",
                "ASCII letters, digits, hyphens, and underscores only",
            ));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalized code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CodeKey {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<String> for CodeKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_code_parses_and_uppercases() {
        let key = CodeKey::try_new("save10").unwrap();
        assert_eq!(key.as_str(), "SAVE10");
    }

    #[test]
    fn already_uppercase_code_is_unchanged() {
        let key = CodeKey::try_new("SAVE10").unwrap();
        assert_eq!(key.as_str(), "SAVE10");
    }

    #[test]
    fn mixed_case_inputs_normalize_to_same_key() {
        let a = CodeKey::try_new("Summer-2026").unwrap();
        let b = CodeKey::try_new("SUMMER-2026").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let key = CodeKey::try_new("  save10  ").unwrap();
        assert_eq!(key.as_str(), "SAVE10");
    }

    #[test]
    fn empty_input_returns_error() {
        let result = CodeKey::try_new("   ");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn too_short_code_returns_error() {
        let result = CodeKey::try_new("AB");
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn too_long_code_returns_error() {
        let result = CodeKey::try_new(&"X".repeat(33));
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn inner_whitespace_is_rejected() {
        let result = CodeKey::try_new("SAVE 10");
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn special_characters_are_rejected() {
        assert!(CodeKey::try_new("SAVE@10").is_err());
        assert!(CodeKey::try_new("SAVE#10").is_err());
    }

    #[test]
    fn hyphens_and_underscores_are_allowed() {
        assert!(CodeKey::try_new("EARLY-BIRD_26").is_ok());
    }

    #[test]
    fn try_from_str_works() {
        let key: CodeKey = "winter20".try_into().unwrap();
        assert_eq!(key.as_str(), "WINTER20");
    }

    #[test]
    fn serializes_as_bare_string() {
        let key = CodeKey::try_new("SAVE10").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"SAVE10\"");
    }
}
