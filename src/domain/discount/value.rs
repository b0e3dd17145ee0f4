//! Discount value: percentage off or fixed amount off.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Percentage};

/// The magnitude of a discount code.
///
/// Encodes the `type` + `value` pair of the persisted record: a percentage
/// of the purchase amount (0-100) or a fixed amount in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiscountValue {
    /// Percentage of the purchase amount.
    Percentage(Percentage),
    /// Fixed amount off, in minor units.
    Fixed(Money),
}

impl DiscountValue {
    /// Computes the discount amount for a purchase, applying the optional cap.
    ///
    /// A fixed discount larger than the purchase amount is reported in full;
    /// the caller floors the final amount at zero. Percentage math is integer
    /// floor division.
    pub fn discount_for(&self, amount: Money, cap: Option<Money>) -> Money {
        let raw = match self {
            DiscountValue::Percentage(pct) => amount.percent(*pct),
            DiscountValue::Fixed(fixed) => *fixed,
        };
        match cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}
