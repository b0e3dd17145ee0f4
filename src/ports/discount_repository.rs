//! Discount code repository port.
//!
//! Contract for persisting discount codes and performing the atomic
//! redemption primitive. Implementations back onto the record store;
//! tests provide in-memory doubles.
//!
//! # Redemption atomicity
//!
//! Two concurrent callers that each validated against `used_count <
//! usage_limit` must not both get through [`DiscountRepository::redeem`].
//! Implementations express the check-and-increment as one atomic operation
//! (a conditional update executed store-side), so a lost-update over-redeem
//! is impossible regardless of caller interleaving.

use async_trait::async_trait;

use crate::domain::discount::{CodeKey, DiscountCode, RedemptionBlock};
use crate::domain::foundation::{DiscountCodeId, DomainError, Timestamp, UserId};

/// Repository port for discount code persistence.
#[async_trait]
pub trait DiscountRepository: Send + Sync {
    /// Persists a newly created code.
    ///
    /// # Errors
    ///
    /// - `DuplicateCode` if a non-expired record already claims the key
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, code: &DiscountCode) -> Result<(), DomainError>;

    /// Overwrites an existing record.
    ///
    /// # Errors
    ///
    /// - `CodeNotFound` if no record with this id exists
    /// - `DatabaseError` on persistence failure
    async fn update(&self, code: &DiscountCode) -> Result<(), DomainError>;

    /// Removes a record unconditionally. No referential checks.
    ///
    /// # Errors
    ///
    /// - `CodeNotFound` if no record with this id exists
    async fn delete(&self, id: &DiscountCodeId) -> Result<(), DomainError>;

    /// Finds a record by id regardless of status.
    async fn find_by_id(&self, id: &DiscountCodeId) -> Result<Option<DiscountCode>, DomainError>;

    /// Finds the record whose normalized key matches and whose status is
    /// active. This is the validation lookup (gate one).
    async fn find_active_by_code(&self, code: &CodeKey)
        -> Result<Option<DiscountCode>, DomainError>;

    /// True if a non-expired record already claims this key.
    ///
    /// Backs the creation-time uniqueness check.
    async fn is_code_taken(&self, code: &CodeKey) -> Result<bool, DomainError>;

    /// Lists records with active status whose window has not closed as of
    /// `now`. A read-time filter: a record past its window but not yet
    /// observed by validation is excluded here even though its persisted
    /// status still reads active.
    async fn list_active(&self, now: Timestamp) -> Result<Vec<DiscountCode>, DomainError>;

    /// Persists the lazy expiry transition for a record.
    ///
    /// Called from the validation read path when the window is observed to
    /// have closed. Deliberately a side effect of a read operation.
    async fn mark_expired(
        &self,
        id: &DiscountCodeId,
        observed_at: Timestamp,
    ) -> Result<(), DomainError>;

    /// Atomically redeems the code for `user`: one conditional
    /// check-and-increment that adds the user to the redeemer set and bumps
    /// the counter only if the code is active, under its limit, and not
    /// already redeemed by this user.
    ///
    /// # Errors
    ///
    /// Only infrastructure failures are errors; a refused redemption is
    /// reported in the outcome.
    async fn redeem(
        &self,
        id: &DiscountCodeId,
        user: &UserId,
    ) -> Result<RedemptionOutcome, DomainError>;
}

/// Result of an atomic redemption attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionOutcome {
    /// The counter was incremented and the user recorded.
    Redeemed,
    /// No record with this id exists.
    NotFound,
    /// The conditional check refused the redemption.
    Blocked(RedemptionBlock),
}

impl RedemptionOutcome {
    /// Returns true if the redemption went through.
    pub fn is_redeemed(&self) -> bool {
        matches!(self, RedemptionOutcome::Redeemed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_reports_success() {
        assert!(RedemptionOutcome::Redeemed.is_redeemed());
        assert!(!RedemptionOutcome::NotFound.is_redeemed());
        assert!(!RedemptionOutcome::Blocked(RedemptionBlock::LimitReached).is_redeemed());
    }

    #[test]
    fn discount_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DiscountRepository) {}
    }
}
