//! RedeemCodeHandler - Command handler recording a redemption.
//!
//! Called after a successful validation, but deliberately not trusting it:
//! the repository's conditional check-and-increment re-verifies status,
//! limit, and per-user membership atomically, so racing callers cannot
//! over-redeem a code past its limit.

use std::sync::Arc;

use tracing::debug;

use crate::domain::discount::DiscountError;
use crate::domain::foundation::{DiscountCodeId, UserId};
use crate::ports::{DiscountRepository, RedemptionOutcome};

/// Command to redeem a validated code for a user.
#[derive(Debug, Clone)]
pub struct RedeemCodeCommand {
    pub code_id: DiscountCodeId,
    pub user_id: UserId,
}

/// Handler for code redemption.
pub struct RedeemCodeHandler {
    repository: Arc<dyn DiscountRepository>,
}

impl RedeemCodeHandler {
    pub fn new(repository: Arc<dyn DiscountRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RedeemCodeCommand) -> Result<(), DiscountError> {
        // Single atomic conditional operation; store errors propagate since
        // this is a write intent.
        match self.repository.redeem(&cmd.code_id, &cmd.user_id).await? {
            RedemptionOutcome::Redeemed => {
                debug!(code_id = %cmd.code_id, user_id = %cmd.user_id, "code redeemed");
                Ok(())
            }
            RedemptionOutcome::NotFound => Err(DiscountError::NotFound(cmd.code_id)),
            RedemptionOutcome::Blocked(block) => {
                Err(DiscountError::redemption_refused(cmd.code_id, block))
            }
        }
    }
}
