//! Discount code aggregate entity.
//!
//! The sole persisted entity of the discount engine: one flat record per
//! code, holding the matching key, the discount magnitude, eligibility
//! constraints, the validity window, and redemption bookkeeping.
//!
//! # Invariants
//!
//! - `used_count == used_by.len()` (one redemption per user per code)
//! - `used_count <= usage_limit` whenever a limit is set
//! - `valid_from <= valid_to` (rejected at construction)
//! - `status == Expired` implies the window end was observed in the past

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DiscountCodeId, Money, PlanId, Timestamp, UserId, ValidationError,
};

use super::{CodeKey, CodeStatus, DiscountValue};

/// A persisted discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCode {
    /// Unique identifier, assigned at creation.
    pub id: DiscountCodeId,

    /// Normalized (uppercase) matching key.
    pub code: CodeKey,

    /// Discount magnitude: percentage or fixed amount.
    pub value: DiscountValue,

    /// Minimum purchase amount required for eligibility.
    pub min_purchase: Option<Money>,

    /// Cap on the computed discount amount.
    pub max_discount: Option<Money>,

    /// Plans this code applies to; empty means all plans.
    pub applicable_plans: Vec<PlanId>,

    /// Start of the inclusive validity window.
    pub valid_from: Timestamp,

    /// End of the inclusive validity window.
    pub valid_to: Timestamp,

    /// Maximum total redemptions; `None` means unlimited.
    pub usage_limit: Option<u32>,

    /// Completed redemptions. Monotonically non-decreasing.
    pub used_count: u32,

    /// Users that have redeemed this code. Set semantics.
    pub used_by: Vec<UserId>,

    /// Lifecycle status.
    pub status: CodeStatus,

    /// When the record was created.
    pub created_at: Timestamp,

    /// When the record was last written.
    pub updated_at: Timestamp,
}

/// Fields supplied by an operator when creating a code.
#[derive(Debug, Clone)]
pub struct NewDiscountCode {
    pub code: CodeKey,
    pub value: DiscountValue,
    pub min_purchase: Option<Money>,
    pub max_discount: Option<Money>,
    pub applicable_plans: Vec<PlanId>,
    pub valid_from: Timestamp,
    pub valid_to: Timestamp,
    pub usage_limit: Option<u32>,
    pub status: CodeStatus,
}

/// Partial update to an existing code. Absent fields are left unchanged;
/// optional fields cannot be cleared through a patch.
#[derive(Debug, Clone, Default)]
pub struct DiscountCodePatch {
    pub value: Option<DiscountValue>,
    pub min_purchase: Option<Money>,
    pub max_discount: Option<Money>,
    pub applicable_plans: Option<Vec<PlanId>>,
    pub valid_from: Option<Timestamp>,
    pub valid_to: Option<Timestamp>,
    pub usage_limit: Option<u32>,
    pub status: Option<CodeStatus>,
}

/// Why a redemption attempt was refused by the store-side conditional check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionBlock {
    /// Code is inactive or expired.
    NotActive,
    /// Usage limit already reached.
    LimitReached,
    /// This user has already redeemed the code.
    AlreadyRedeemed,
}

impl DiscountCode {
    /// Creates a new code with zeroed redemption bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the validity window is inverted.
    pub fn create(
        id: DiscountCodeId,
        fields: NewDiscountCode,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        if fields.valid_to.is_before(&fields.valid_from) {
            return Err(ValidationError::invalid_format(
                "validity_window",
                "valid_to precedes valid_from",
            ));
        }

        Ok(Self {
            id,
            code: fields.code,
            value: fields.value,
            min_purchase: fields.min_purchase,
            max_discount: fields.max_discount,
            applicable_plans: fields.applicable_plans,
            valid_from: fields.valid_from,
            valid_to: fields.valid_to,
            usage_limit: fields.usage_limit,
            used_count: 0,
            used_by: Vec::new(),
            status: fields.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// True if the usage limit is set and reached.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .map(|limit| self.used_count >= limit)
            .unwrap_or(false)
    }

    /// True if the given user has already redeemed this code.
    pub fn was_redeemed_by(&self, user: &UserId) -> bool {
        self.used_by.contains(user)
    }

    /// True if the code applies to the given plan.
    ///
    /// An empty plan set means the code applies everywhere.
    pub fn applies_to(&self, plan: &PlanId) -> bool {
        self.applicable_plans.is_empty() || self.applicable_plans.contains(plan)
    }

    /// Returns the first condition that would block a redemption by `user`,
    /// or `None` if the redemption may proceed.
    ///
    /// This is the same predicate the store-side conditional update encodes;
    /// adapters that cannot push the check into the store evaluate it here.
    pub fn redemption_block(&self, user: &UserId) -> Option<RedemptionBlock> {
        if !self.status.is_active() {
            return Some(RedemptionBlock::NotActive);
        }
        if self.is_exhausted() {
            return Some(RedemptionBlock::LimitReached);
        }
        if self.was_redeemed_by(user) {
            return Some(RedemptionBlock::AlreadyRedeemed);
        }
        None
    }

    /// Records a redemption: increments the counter and adds the user to the
    /// redeemer set, after re-checking the blocking conditions.
    pub fn record_redemption(
        &mut self,
        user: UserId,
        now: Timestamp,
    ) -> Result<(), RedemptionBlock> {
        if let Some(block) = self.redemption_block(&user) {
            return Err(block);
        }
        self.used_count += 1;
        self.used_by.push(user);
        self.updated_at = now;
        Ok(())
    }

    /// Applies the lazy expiry transition.
    pub fn mark_expired(&mut self, now: Timestamp) {
        self.status = CodeStatus::Expired;
        self.updated_at = now;
    }

    /// Merges a partial update into this record and stamps `updated_at`.
    pub fn apply_patch(&mut self, patch: DiscountCodePatch, now: Timestamp) {
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(min_purchase) = patch.min_purchase {
            self.min_purchase = Some(min_purchase);
        }
        if let Some(max_discount) = patch.max_discount {
            self.max_discount = Some(max_discount);
        }
        if let Some(plans) = patch.applicable_plans {
            self.applicable_plans = plans;
        }
        if let Some(valid_from) = patch.valid_from {
            self.valid_from = valid_from;
        }
        if let Some(valid_to) = patch.valid_to {
            self.valid_to = valid_to;
        }
        if let Some(usage_limit) = patch.usage_limit {
            self.usage_limit = Some(usage_limit);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}
