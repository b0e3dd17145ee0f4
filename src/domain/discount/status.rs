//! Discount code lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a discount code.
///
/// `Active` is required for validation to proceed. `Expired` is terminal and
/// applied lazily: the first validation that observes the validity window has
/// passed persists the transition (there is no sweeper job).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStatus {
    /// Redeemable, subject to the validation gates.
    Active,

    /// Switched off by an operator; invisible to validation.
    Inactive,

    /// Validity window has passed and was observed. Terminal.
    Expired,
}

impl CodeStatus {
    /// Returns true if validation may consider this code.
    pub fn is_active(&self) -> bool {
        matches!(self, CodeStatus::Active)
    }
}

impl Default for CodeStatus {
    fn default() -> Self {
        CodeStatus::Active
    }
}
