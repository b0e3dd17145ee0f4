//! ValidateCodeHandler - Query handler running the discount validation gates.
//!
//! The contract is total: every outcome, including store unavailability, is
//! reported as data. Callers never need a catch path to render a result.

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::discount::{
    evaluate, CodeKey, DiscountCode, Evaluation, PurchaseContext, RejectionReason,
};
use crate::domain::foundation::{Money, PlanId, Timestamp, UserId};
use crate::ports::DiscountRepository;

/// Command to validate a discount code against a purchase.
#[derive(Debug, Clone)]
pub struct ValidateCodeCommand {
    /// Raw code as typed by the user; matching is case-insensitive.
    pub code: String,
    /// Purchase amount in minor units.
    pub amount: Money,
    pub user_id: UserId,
    pub plan_id: Option<PlanId>,
}

/// Outcome of a validation request. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeValidation {
    /// All gates passed.
    Accepted {
        discount_amount: Money,
        final_amount: Money,
        /// The matched record, for display and for the follow-up redeem call.
        code: DiscountCode,
    },
    /// A gate failed, or the store was unreachable.
    Rejected { reason: RejectionReason },
}

impl CodeValidation {
    fn rejected(reason: RejectionReason) -> Self {
        CodeValidation::Rejected { reason }
    }

    /// Returns true if the code was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CodeValidation::Accepted { .. })
    }
}

/// Handler for discount code validation.
pub struct ValidateCodeHandler {
    repository: Arc<dyn DiscountRepository>,
}

impl ValidateCodeHandler {
    pub fn new(repository: Arc<dyn DiscountRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ValidateCodeCommand) -> CodeValidation {
        // 1. Normalize the entered code. Input that cannot be a key cannot
        //    match a record, so it reports as not found.
        let Ok(key) = CodeKey::try_new(&cmd.code) else {
            return CodeValidation::rejected(RejectionReason::NotFound);
        };

        // 2. Look up the active record. Store failure degrades to a
        //    rejection so the caller still gets a decision.
        let record = match self.repository.find_active_by_code(&key).await {
            Ok(Some(record)) => record,
            Ok(None) => return CodeValidation::rejected(RejectionReason::NotFound),
            Err(err) => {
                if err.is_transient() {
                    warn!(code = %key, error = %err, "discount lookup failed");
                } else {
                    error!(code = %key, error = %err, "discount lookup returned bad data");
                }
                return CodeValidation::rejected(RejectionReason::LookupFailed);
            }
        };

        // 3. Run the gates.
        let now = Timestamp::now();
        let purchase = PurchaseContext {
            amount: cmd.amount,
            user_id: cmd.user_id,
            plan_id: cmd.plan_id,
        };

        match evaluate(&record, &purchase, now) {
            Evaluation::Accepted {
                discount_amount,
                final_amount,
            } => CodeValidation::Accepted {
                discount_amount,
                final_amount,
                code: record,
            },
            Evaluation::Rejected(reason) => {
                // 4. Lazy expiry: the first validation that observes a closed
                //    window persists the terminal status. The rejection stands
                //    even if the bookkeeping write fails.
                if matches!(reason, RejectionReason::Expired { .. }) {
                    if let Err(err) = self.repository.mark_expired(&record.id, now).await {
                        warn!(code = %key, error = %err, "expiry bookkeeping write failed");
                    }
                }
                CodeValidation::rejected(reason)
            }
        }
    }
}
