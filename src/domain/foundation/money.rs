//! Money value object in integer minor units.
//!
//! All currency amounts are carried as i64 minor units (cents). Discount
//! arithmetic stays in integer space, so repeated computation cannot drift.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Percentage, ValidationError};

/// A non-negative currency amount in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a Money value from minor units, rejecting negative input.
    pub fn from_minor(minor: i64) -> Result<Self, ValidationError> {
        if minor < 0 {
            return Err(ValidationError::negative("amount_minor", minor));
        }
        Ok(Self(minor))
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Subtracts another amount, flooring at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Returns the given percentage of this amount, rounded down.
    pub fn percent(&self, pct: Percentage) -> Money {
        let product = i128::from(self.0) * i128::from(pct.value()) / 100;
        Money(product as i64)
    }

    /// Returns the smaller of two amounts.
    pub fn min(self, other: Money) -> Money {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
