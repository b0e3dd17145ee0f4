//! In-memory implementation of DiscountRepository.
//!
//! Backs integration tests and local development without a database. The
//! redemption path holds the write lock across the whole check-and-increment,
//! giving the same atomicity the SQL conditional UPDATE provides.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::discount::{CodeKey, CodeStatus, DiscountCode};
use crate::domain::foundation::{DiscountCodeId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{DiscountRepository, RedemptionOutcome};

/// DiscountRepository holding records in process memory.
#[derive(Default)]
pub struct InMemoryDiscountRepository {
    records: RwLock<Vec<DiscountCode>>,
}

impl InMemoryDiscountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiscountRepository for InMemoryDiscountRepository {
    async fn insert(&self, code: &DiscountCode) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let taken = records
            .iter()
            .any(|r| r.code == code.code && r.status != CodeStatus::Expired);
        if taken {
            return Err(DomainError::new(
                ErrorCode::DuplicateCode,
                format!("Discount code '{}' already exists", code.code),
            ));
        }
        records.push(code.clone());
        Ok(())
    }

    async fn update(&self, code: &DiscountCode) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == code.id) {
            Some(slot) => {
                *slot = code.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CodeNotFound,
                "Discount code not found",
            )),
        }
    }

    async fn delete(&self, id: &DiscountCodeId) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != *id);
        if records.len() == before {
            return Err(DomainError::new(
                ErrorCode::CodeNotFound,
                "Discount code not found",
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &DiscountCodeId) -> Result<Option<DiscountCode>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn find_active_by_code(
        &self,
        code: &CodeKey,
    ) -> Result<Option<DiscountCode>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.code == *code && r.status.is_active())
            .cloned())
    }

    async fn is_code_taken(&self, code: &CodeKey) -> Result<bool, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .any(|r| r.code == *code && r.status != CodeStatus::Expired))
    }

    async fn list_active(&self, now: Timestamp) -> Result<Vec<DiscountCode>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.status.is_active() && !now.is_after(&r.valid_to))
            .cloned()
            .collect())
    }

    async fn mark_expired(
        &self,
        id: &DiscountCodeId,
        observed_at: Timestamp,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == *id) {
            Some(record) => {
                record.mark_expired(observed_at);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CodeNotFound,
                "Discount code not found",
            )),
        }
    }

    async fn redeem(
        &self,
        id: &DiscountCodeId,
        user: &UserId,
    ) -> Result<RedemptionOutcome, DomainError> {
        // Exclusive lock for the whole check-and-increment.
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == *id) else {
            return Ok(RedemptionOutcome::NotFound);
        };
        match record.record_redemption(user.clone(), Timestamp::now()) {
            Ok(()) => Ok(RedemptionOutcome::Redeemed),
            Err(block) => Ok(RedemptionOutcome::Blocked(block)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discount::{DiscountValue, NewDiscountCode, RedemptionBlock};
    use crate::domain::foundation::Percentage;

    fn sample(key: &str, limit: Option<u32>) -> DiscountCode {
        let now = Timestamp::now();
        DiscountCode::create(
            DiscountCodeId::new(),
            NewDiscountCode {
                code: CodeKey::try_new(key).unwrap(),
                value: DiscountValue::Percentage(Percentage::try_new(10).unwrap()),
                min_purchase: None,
                max_discount: None,
                applicable_plans: Vec::new(),
                valid_from: now.minus_days(1),
                valid_to: now.plus_days(30),
                usage_limit: limit,
                status: CodeStatus::Active,
            },
            now,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_then_lookup_by_code() {
        let repo = InMemoryDiscountRepository::new();
        let code = sample("SAVE10", None);
        repo.insert(&code).await.unwrap();

        let found = repo
            .find_active_by_code(&CodeKey::try_new("save10").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(code));
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let repo = InMemoryDiscountRepository::new();
        repo.insert(&sample("SAVE10", None)).await.unwrap();

        let result = repo.insert(&sample("SAVE10", None)).await;
        assert!(matches!(result, Err(e) if e.code == ErrorCode::DuplicateCode));
    }

    #[tokio::test]
    async fn redeem_respects_usage_limit() {
        let repo = InMemoryDiscountRepository::new();
        let code = sample("ONCE26", Some(1));
        repo.insert(&code).await.unwrap();

        let first = repo
            .redeem(&code.id, &UserId::new("alice").unwrap())
            .await
            .unwrap();
        assert_eq!(first, RedemptionOutcome::Redeemed);

        let second = repo
            .redeem(&code.id, &UserId::new("bob").unwrap())
            .await
            .unwrap();
        assert_eq!(
            second,
            RedemptionOutcome::Blocked(RedemptionBlock::LimitReached)
        );
    }

    #[tokio::test]
    async fn redeem_unknown_id_is_not_found() {
        let repo = InMemoryDiscountRepository::new();
        let outcome = repo
            .redeem(&DiscountCodeId::new(), &UserId::new("alice").unwrap())
            .await
            .unwrap();
        assert_eq!(outcome, RedemptionOutcome::NotFound);
    }
}
