//! UpdateCodeHandler - Command handler merging partial updates into a code.

use std::sync::Arc;

use crate::domain::discount::{DiscountCode, DiscountCodePatch, DiscountError};
use crate::domain::foundation::{DiscountCodeId, Timestamp};
use crate::ports::DiscountRepository;

/// Command to update an existing discount code.
#[derive(Debug, Clone)]
pub struct UpdateCodeCommand {
    pub id: DiscountCodeId,
    pub patch: DiscountCodePatch,
}

/// Handler for partial code updates.
pub struct UpdateCodeHandler {
    repository: Arc<dyn DiscountRepository>,
}

impl UpdateCodeHandler {
    pub fn new(repository: Arc<dyn DiscountRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateCodeCommand) -> Result<DiscountCode, DiscountError> {
        // 1. Load the current record.
        let mut record = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or(DiscountError::NotFound(cmd.id))?;

        // 2. Merge the patch and stamp the update time. The patch is built
        //    from value objects, so out-of-range values cannot arrive here.
        record.apply_patch(cmd.patch, Timestamp::now());

        // 3. Persist the merged record.
        self.repository.update(&record).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discount::{
        CodeKey, CodeStatus, DiscountValue, NewDiscountCode,
    };
    use crate::domain::foundation::{DomainError, Money, Percentage, UserId};
    use crate::ports::RedemptionOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockDiscountRepository {
        record: Mutex<Option<DiscountCode>>,
        updated: Mutex<Vec<DiscountCode>>,
    }

    impl MockDiscountRepository {
        fn holding(record: DiscountCode) -> Self {
            Self {
                record: Mutex::new(Some(record)),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                record: Mutex::new(None),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn updated(&self) -> Vec<DiscountCode> {
            self.updated.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DiscountRepository for MockDiscountRepository {
        async fn insert(&self, _code: &DiscountCode) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, code: &DiscountCode) -> Result<(), DomainError> {
            self.updated.lock().unwrap().push(code.clone());
            Ok(())
        }

        async fn delete(&self, _id: &DiscountCodeId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &DiscountCodeId,
        ) -> Result<Option<DiscountCode>, DomainError> {
            Ok(self.record.lock().unwrap().clone())
        }

        async fn find_active_by_code(
            &self,
            _code: &CodeKey,
        ) -> Result<Option<DiscountCode>, DomainError> {
            Ok(None)
        }

        async fn is_code_taken(&self, _code: &CodeKey) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn list_active(&self, _now: Timestamp) -> Result<Vec<DiscountCode>, DomainError> {
            Ok(Vec::new())
        }

        async fn mark_expired(
            &self,
            _id: &DiscountCodeId,
            _observed_at: Timestamp,
        ) -> Result<(), DomainError> {
            Ok(())
        }

        async fn redeem(
            &self,
            _id: &DiscountCodeId,
            _user: &UserId,
        ) -> Result<RedemptionOutcome, DomainError> {
            Ok(RedemptionOutcome::Redeemed)
        }
    }

    fn existing_record() -> DiscountCode {
        let now = Timestamp::now();
        DiscountCode::create(
            DiscountCodeId::new(),
            NewDiscountCode {
                code: CodeKey::try_new("SAVE10").unwrap(),
                value: DiscountValue::Percentage(Percentage::try_new(10).unwrap()),
                min_purchase: None,
                max_discount: None,
                applicable_plans: Vec::new(),
                valid_from: now.minus_days(1),
                valid_to: now.plus_days(30),
                usage_limit: None,
                status: CodeStatus::Active,
            },
            now,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn merges_patch_and_persists() {
        let record = existing_record();
        let id = record.id;
        let repo = Arc::new(MockDiscountRepository::holding(record));
        let handler = UpdateCodeHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateCodeCommand {
                id,
                patch: DiscountCodePatch {
                    max_discount: Some(Money::from_minor(50_000).unwrap()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.max_discount, Some(Money::from_minor(50_000).unwrap()));
        // Untouched fields survive the merge.
        assert_eq!(updated.code.as_str(), "SAVE10");
        assert_eq!(repo.updated().len(), 1);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let repo = Arc::new(MockDiscountRepository::empty());
        let handler = UpdateCodeHandler::new(repo.clone());

        let result = handler
            .handle(UpdateCodeCommand {
                id: DiscountCodeId::new(),
                patch: DiscountCodePatch::default(),
            })
            .await;

        assert!(matches!(result, Err(DiscountError::NotFound(_))));
        assert!(repo.updated().is_empty());
    }
}
