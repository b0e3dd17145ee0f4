//! Discount validation gates.
//!
//! Validation is an ordered sequence of business-rule gates; the first
//! failing gate wins and short-circuits the rest. The evaluator is a pure
//! function over an already-loaded record, so window boundaries and discount
//! math are testable at exact instants. Lookup (gate one) and the lazy
//! expiry write live in the application handler, which owns store access.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId, Timestamp, UserId};

use super::DiscountCode;

/// The purchase a code is being validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseContext {
    /// Order amount in minor units.
    pub amount: Money,
    /// User attempting the redemption.
    pub user_id: UserId,
    /// Plan the purchase is for, when the caller knows it.
    pub plan_id: Option<PlanId>,
}

/// Outcome of running the gates against a loaded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Every gate passed; the discount applies.
    Accepted {
        /// Computed discount, after the optional cap.
        discount_amount: Money,
        /// Amount still owed; floored at zero.
        final_amount: Money,
    },
    /// A gate failed.
    Rejected(RejectionReason),
}

/// Why validation rejected a code.
///
/// Rejection is an expected, user-facing outcome, reported as data rather
/// than an error. Each variant carries what the UI needs to explain itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RejectionReason {
    /// No active record matches the entered code.
    NotFound,

    /// The validity window has not opened yet.
    NotYetValid {
        /// When the code becomes valid (RFC 3339).
        starts_at: String,
    },

    /// The validity window has closed.
    Expired {
        /// When the code stopped being valid (RFC 3339).
        ended_at: String,
    },

    /// Total redemption limit reached.
    UsageLimitReached {
        /// Redemptions recorded so far.
        used: u32,
        /// The configured limit.
        limit: u32,
    },

    /// This user already redeemed the code.
    AlreadyRedeemed,

    /// Purchase amount is below the code's minimum.
    MinPurchaseNotMet {
        /// Required minimum, in minor units.
        minimum: Money,
    },

    /// The code is scoped to other plans.
    PlanNotApplicable {
        /// The plan the caller supplied.
        plan: String,
    },

    /// The record store could not be reached; validation degraded to a
    /// rejection rather than an error so callers always get a decision.
    LookupFailed,
}

impl RejectionReason {
    /// User-facing message for this rejection.
    pub fn user_message(&self) -> String {
        match self {
            RejectionReason::NotFound => {
                "This discount code was not found. Please check and try again.".to_string()
            }
            RejectionReason::NotYetValid { starts_at } => {
                format!("This discount code is not valid yet. It starts on {}.", starts_at)
            }
            RejectionReason::Expired { ended_at } => {
                format!("This discount code expired on {}.", ended_at)
            }
            RejectionReason::UsageLimitReached { used, limit } => {
                format!(
                    "This discount code has reached its usage limit ({}/{} uses).",
                    used, limit
                )
            }
            RejectionReason::AlreadyRedeemed => {
                "You have already used this discount code.".to_string()
            }
            RejectionReason::MinPurchaseNotMet { minimum } => {
                format!("This discount code requires a minimum purchase of {}.", minimum)
            }
            RejectionReason::PlanNotApplicable { plan } => {
                format!("This discount code cannot be applied to the {} plan.", plan)
            }
            RejectionReason::LookupFailed => {
                "Discount codes are temporarily unavailable. Please try again.".to_string()
            }
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// Runs the gates against a loaded, active record.
///
/// Gate order (first failure wins):
/// 1. window not yet open
/// 2. window closed (the caller persists the expiry transition)
/// 3. usage limit reached
/// 4. already redeemed by this user
/// 5. minimum purchase not met
/// 6. plan not applicable (only when the caller supplies a plan and the
///    record scopes to specific plans)
///
/// The window is inclusive on both ends: validation at exactly `valid_from`
/// or exactly `valid_to` succeeds.
pub fn evaluate(code: &DiscountCode, purchase: &PurchaseContext, now: Timestamp) -> Evaluation {
    if now.is_before(&code.valid_from) {
        return Evaluation::Rejected(RejectionReason::NotYetValid {
            starts_at: code.valid_from.to_rfc3339(),
        });
    }

    if now.is_after(&code.valid_to) {
        return Evaluation::Rejected(RejectionReason::Expired {
            ended_at: code.valid_to.to_rfc3339(),
        });
    }

    if let Some(limit) = code.usage_limit {
        if code.used_count >= limit {
            return Evaluation::Rejected(RejectionReason::UsageLimitReached {
                used: code.used_count,
                limit,
            });
        }
    }

    if code.was_redeemed_by(&purchase.user_id) {
        return Evaluation::Rejected(RejectionReason::AlreadyRedeemed);
    }

    if let Some(minimum) = code.min_purchase {
        if purchase.amount < minimum {
            return Evaluation::Rejected(RejectionReason::MinPurchaseNotMet { minimum });
        }
    }

    if let Some(plan) = &purchase.plan_id {
        if !code.applies_to(plan) {
            return Evaluation::Rejected(RejectionReason::PlanNotApplicable {
                plan: plan.as_str().to_string(),
            });
        }
    }

    let discount_amount = code.value.discount_for(purchase.amount, code.max_discount);
    let final_amount = purchase.amount.saturating_sub(discount_amount);

    Evaluation::Accepted {
        discount_amount,
        final_amount,
    }
}
