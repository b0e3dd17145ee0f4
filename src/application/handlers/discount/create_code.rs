//! CreateCodeHandler - Command handler for creating discount codes.

use std::sync::Arc;

use crate::domain::discount::{
    CodeKey, CodeStatus, DiscountCode, DiscountError, DiscountValue, NewDiscountCode,
};
use crate::domain::foundation::{DiscountCodeId, Money, PlanId, Timestamp};
use crate::ports::DiscountRepository;

/// Command to create a new discount code.
#[derive(Debug, Clone)]
pub struct CreateCodeCommand {
    /// Raw code; normalized to uppercase before storage.
    pub code: String,
    pub value: DiscountValue,
    pub min_purchase: Option<Money>,
    pub max_discount: Option<Money>,
    pub applicable_plans: Vec<PlanId>,
    pub valid_from: Timestamp,
    pub valid_to: Timestamp,
    pub usage_limit: Option<u32>,
    /// Initial status; defaults to active when omitted.
    pub status: Option<CodeStatus>,
}

/// Handler for code creation.
pub struct CreateCodeHandler {
    repository: Arc<dyn DiscountRepository>,
}

impl CreateCodeHandler {
    pub fn new(repository: Arc<dyn DiscountRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateCodeCommand) -> Result<DiscountCode, DiscountError> {
        // 1. Normalize and validate the matching key.
        let key = CodeKey::try_new(&cmd.code)?;

        // 2. Enforce uniqueness among non-expired codes. The partial unique
        //    index is the authoritative guard; this check gives a clean error
        //    before the insert round trip.
        if self.repository.is_code_taken(&key).await? {
            return Err(DiscountError::duplicate_code(key.as_str()));
        }

        // 3. Build the aggregate with zeroed redemption bookkeeping.
        let now = Timestamp::now();
        let record = DiscountCode::create(
            DiscountCodeId::new(),
            NewDiscountCode {
                code: key,
                value: cmd.value,
                min_purchase: cmd.min_purchase,
                max_discount: cmd.max_discount,
                applicable_plans: cmd.applicable_plans,
                valid_from: cmd.valid_from,
                valid_to: cmd.valid_to,
                usage_limit: cmd.usage_limit,
                status: cmd.status.unwrap_or_default(),
            },
            now,
        )?;

        // 4. Persist and hand back the stored record, id included.
        self.repository.insert(&record).await?;
        Ok(record)
    }
}
