//! HTTP DTOs for discount code endpoints.
//!
//! The JSON boundary between forms and the application layer. Amounts are
//! integer minor units; domain value objects are constructed (and
//! validated) in the handlers, so no store or domain invariants depend on
//! these types.

use serde::{Deserialize, Serialize};

use crate::domain::discount::{CodeStatus, DiscountCode, DiscountValue, RejectionReason};
use crate::domain::foundation::Timestamp;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to validate a code against a purchase.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateCodeRequest {
    pub code: String,
    /// Purchase amount in minor units.
    pub amount: i64,
    pub user_id: String,
    #[serde(default)]
    pub plan_id: Option<String>,
}

/// Request to redeem a previously validated code.
#[derive(Debug, Clone, Deserialize)]
pub struct RedeemCodeRequest {
    pub code_id: String,
    pub user_id: String,
}

/// Request to create a discount code.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCodeRequest {
    pub code: String,
    /// "percentage" or "fixed".
    pub kind: String,
    /// Percent (0-100) or amount in minor units, per `kind`.
    pub value: i64,
    #[serde(default)]
    pub min_purchase: Option<i64>,
    #[serde(default)]
    pub max_discount: Option<i64>,
    #[serde(default)]
    pub applicable_plans: Vec<String>,
    pub valid_from: Timestamp,
    pub valid_to: Timestamp,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub status: Option<CodeStatus>,
}

/// Request to partially update a discount code. Absent fields stay
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCodeRequest {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub min_purchase: Option<i64>,
    #[serde(default)]
    pub max_discount: Option<i64>,
    #[serde(default)]
    pub applicable_plans: Option<Vec<String>>,
    #[serde(default)]
    pub valid_from: Option<Timestamp>,
    #[serde(default)]
    pub valid_to: Option<Timestamp>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub status: Option<CodeStatus>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Validation outcome, always a 200 with a decidable body.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ValidationResponse {
    Accepted {
        valid: bool,
        discount_amount: i64,
        final_amount: i64,
        code: CodeResponse,
    },
    Rejected {
        valid: bool,
        reason: RejectionReason,
        message: String,
    },
}

impl ValidationResponse {
    pub fn accepted(discount_amount: i64, final_amount: i64, code: CodeResponse) -> Self {
        ValidationResponse::Accepted {
            valid: true,
            discount_amount,
            final_amount,
            code,
        }
    }

    pub fn rejected(reason: RejectionReason) -> Self {
        let message = reason.user_message();
        ValidationResponse::Rejected {
            valid: false,
            reason,
            message,
        }
    }
}

/// A discount code as rendered to the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct CodeResponse {
    pub id: String,
    pub code: String,
    pub value: DiscountValue,
    pub min_purchase: Option<i64>,
    pub max_discount: Option<i64>,
    pub applicable_plans: Vec<String>,
    pub valid_from: Timestamp,
    pub valid_to: Timestamp,
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    pub status: CodeStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DiscountCode> for CodeResponse {
    fn from(code: DiscountCode) -> Self {
        Self {
            id: code.id.to_string(),
            code: code.code.as_str().to_string(),
            value: code.value,
            min_purchase: code.min_purchase.map(|m| m.minor()),
            max_discount: code.max_discount.map(|m| m.minor()),
            applicable_plans: code
                .applicable_plans
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            valid_from: code.valid_from,
            valid_to: code.valid_to,
            usage_limit: code.usage_limit,
            used_count: code.used_count,
            status: code.status,
            created_at: code.created_at,
            updated_at: code.updated_at,
        }
    }
}

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
