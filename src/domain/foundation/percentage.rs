//! Whole-number percentage, 0 to 100.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Discount percentages and extraction confidence scores, bounded to
/// [0, 100]. Construction is the only place the bound is checked; a held
/// value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Validates and wraps a raw value.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percent",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// The raw value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds() {
        assert_eq!(Percentage::try_new(0).unwrap(), Percentage::ZERO);
        assert_eq!(Percentage::try_new(100).unwrap(), Percentage::HUNDRED);
        assert_eq!(Percentage::try_new(50).unwrap().value(), 50);
    }

    #[test]
    fn try_new_rejects_over_100() {
        let result = Percentage::try_new(101);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percent");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(format!("{}", Percentage::try_new(25).unwrap()), "25%");
    }
}
