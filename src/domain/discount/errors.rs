//! Discount-specific error types.
//!
//! Only write-path failures surface here; validation rejections travel as
//! data inside the validation result, never as errors.

use thiserror::Error;

use crate::domain::foundation::{DiscountCodeId, DomainError, ValidationError};

use super::RedemptionBlock;

/// Errors raised by discount lifecycle and redemption operations.
#[derive(Debug, Clone, Error)]
pub enum DiscountError {
    /// No record with this id exists.
    #[error("Discount code {0} not found")]
    NotFound(DiscountCodeId),

    /// A non-expired record already claims this code.
    #[error("Discount code '{code}' already exists")]
    DuplicateCode { code: String },

    /// The store-side conditional check refused the redemption.
    #[error("Redemption of {id} refused: {block:?}")]
    RedemptionRefused {
        id: DiscountCodeId,
        block: RedemptionBlock,
    },

    /// A supplied field failed validation.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The record store failed.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DiscountError {
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        DiscountError::DuplicateCode { code: code.into() }
    }

    pub fn redemption_refused(id: DiscountCodeId, block: RedemptionBlock) -> Self {
        DiscountError::RedemptionRefused { id, block }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DiscountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for DiscountError {
    fn from(err: DomainError) -> Self {
        DiscountError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for DiscountError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::Negative { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DiscountError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}
