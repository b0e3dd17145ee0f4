//! DeleteCodeHandler - Command handler removing a discount code.
//!
//! Deletion is unconditional: no check for in-flight redemptions or
//! referential state.

use std::sync::Arc;

use crate::domain::discount::DiscountError;
use crate::domain::foundation::{DiscountCodeId, ErrorCode};
use crate::ports::DiscountRepository;

/// Command to delete a discount code.
#[derive(Debug, Clone)]
pub struct DeleteCodeCommand {
    pub id: DiscountCodeId,
}

/// Handler for code deletion.
pub struct DeleteCodeHandler {
    repository: Arc<dyn DiscountRepository>,
}

impl DeleteCodeHandler {
    pub fn new(repository: Arc<dyn DiscountRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCodeCommand) -> Result<(), DiscountError> {
        self.repository.delete(&cmd.id).await.map_err(|err| {
            if err.code == ErrorCode::CodeNotFound {
                DiscountError::NotFound(cmd.id)
            } else {
                DiscountError::Infrastructure(err.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discount::{CodeKey, DiscountCode};
    use crate::domain::foundation::{DomainError, Timestamp, UserId};
    use crate::ports::RedemptionOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockDiscountRepository {
        known_id: Option<DiscountCodeId>,
        deleted: Mutex<Vec<DiscountCodeId>>,
    }

    impl MockDiscountRepository {
        fn holding(id: DiscountCodeId) -> Self {
            Self {
                known_id: Some(id),
                deleted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DiscountRepository for MockDiscountRepository {
        async fn insert(&self, _code: &DiscountCode) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _code: &DiscountCode) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, id: &DiscountCodeId) -> Result<(), DomainError> {
            if self.known_id != Some(*id) {
                return Err(DomainError::new(
                    ErrorCode::CodeNotFound,
                    "Discount code not found",
                ));
            }
            self.deleted.lock().unwrap().push(*id);
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &DiscountCodeId,
        ) -> Result<Option<DiscountCode>, DomainError> {
            Ok(None)
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

    #[tokio::test]
    async fn deletes_existing_record() {
        let id = DiscountCodeId::new();
        let repo = Arc::new(MockDiscountRepository::holding(id));
        let handler = DeleteCodeHandler::new(repo.clone());

        handler.handle(DeleteCodeCommand { id }).await.unwrap();
        assert_eq!(*repo.deleted.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let repo = Arc::new(MockDiscountRepository::holding(DiscountCodeId::new()));
        let handler = DeleteCodeHandler::new(repo);

        let result = handler
            .handle(DeleteCodeCommand {
                id: DiscountCodeId::new(),
            })
            .await;
        assert!(matches!(result, Err(DiscountError::NotFound(_))));
    }
}
