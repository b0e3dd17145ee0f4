//! HTTP handlers for discount code endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers and translate between JSON DTOs and domain types.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::discount::{
    CodeValidation, CreateCodeCommand, CreateCodeHandler, DeleteCodeCommand, DeleteCodeHandler,
    ListActiveCodesHandler, RedeemCodeCommand, RedeemCodeHandler, UpdateCodeCommand,
    UpdateCodeHandler, ValidateCodeCommand, ValidateCodeHandler,
};
use crate::domain::discount::{
    DiscountCodePatch, DiscountError, DiscountValue, RedemptionBlock,
};
use crate::domain::foundation::{
    DiscountCodeId, Money, Percentage, PlanId, UserId, ValidationError,
};
use crate::ports::DiscountRepository;

use super::dto::{
    CodeResponse, CreateCodeRequest, ErrorResponse, RedeemCodeRequest, UpdateCodeRequest,
    ValidateCodeRequest, ValidationResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the discount endpoints.
#[derive(Clone)]
pub struct DiscountAppState {
    pub repository: Arc<dyn DiscountRepository>,
}

impl DiscountAppState {
    pub fn validate_handler(&self) -> ValidateCodeHandler {
        ValidateCodeHandler::new(self.repository.clone())
    }

    pub fn redeem_handler(&self) -> RedeemCodeHandler {
        RedeemCodeHandler::new(self.repository.clone())
    }

    pub fn create_handler(&self) -> CreateCodeHandler {
        CreateCodeHandler::new(self.repository.clone())
    }

    pub fn update_handler(&self) -> UpdateCodeHandler {
        UpdateCodeHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteCodeHandler {
        DeleteCodeHandler::new(self.repository.clone())
    }

    pub fn list_handler(&self) -> ListActiveCodesHandler {
        ListActiveCodesHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

/// HTTP error wrapper for discount endpoints.
pub enum DiscountApiError {
    BadRequest(String),
    Domain(DiscountError),
}

impl From<DiscountError> for DiscountApiError {
    fn from(err: DiscountError) -> Self {
        DiscountApiError::Domain(err)
    }
}

impl From<ValidationError> for DiscountApiError {
    fn from(err: ValidationError) -> Self {
        DiscountApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for DiscountApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match self {
            DiscountApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
            DiscountApiError::Domain(err) => match &err {
                DiscountError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, "CODE_NOT_FOUND", err.to_string())
                }
                DiscountError::DuplicateCode { .. } => {
                    (StatusCode::CONFLICT, "DUPLICATE_CODE", err.to_string())
                }
                DiscountError::RedemptionRefused { block, .. } => {
                    let code = match block {
                        RedemptionBlock::NotActive => "CODE_NOT_ACTIVE",
                        RedemptionBlock::LimitReached => "USAGE_LIMIT_REACHED",
                        RedemptionBlock::AlreadyRedeemed => "ALREADY_REDEEMED",
                    };
                    (StatusCode::CONFLICT, code, err.to_string())
                }
                DiscountError::ValidationFailed { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", err.to_string())
                }
                DiscountError::Infrastructure(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                ),
            },
        };
        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request Parsing Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_user_id(raw: &str) -> Result<UserId, DiscountApiError> {
    Ok(UserId::new(raw)?)
}

fn parse_code_id(raw: &str) -> Result<DiscountCodeId, DiscountApiError> {
    DiscountCodeId::from_str(raw)
        .map_err(|_| DiscountApiError::BadRequest(format!("Invalid code id: {}", raw)))
}

fn parse_money(field: &str, minor: i64) -> Result<Money, DiscountApiError> {
    Money::from_minor(minor)
        .map_err(|_| DiscountApiError::BadRequest(format!("Field '{}' must not be negative", field)))
}

fn parse_discount_value(kind: &str, value: i64) -> Result<DiscountValue, DiscountApiError> {
    match kind {
        "percentage" => {
            let pct = u8::try_from(value)
                .ok()
                .and_then(|v| Percentage::try_new(v).ok())
                .ok_or_else(|| {
                    DiscountApiError::BadRequest(format!(
                        "Percentage value must be 0-100, got {}",
                        value
                    ))
                })?;
            Ok(DiscountValue::Percentage(pct))
        }
        "fixed" => Ok(DiscountValue::Fixed(parse_money("value", value)?)),
        other => Err(DiscountApiError::BadRequest(format!(
            "Unknown discount kind: {}",
            other
        ))),
    }
}

fn parse_plans(raw: &[String]) -> Result<Vec<PlanId>, DiscountApiError> {
    raw.iter()
        .map(|p| PlanId::new(p.clone()).map_err(DiscountApiError::from))
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /validate - run the validation gates for a purchase.
pub async fn validate_code(
    State(state): State<DiscountAppState>,
    Json(request): Json<ValidateCodeRequest>,
) -> Result<impl IntoResponse, DiscountApiError> {
    let amount = parse_money("amount", request.amount)?;
    let user_id = parse_user_id(&request.user_id)?;
    let plan_id = request
        .plan_id
        .map(PlanId::new)
        .transpose()
        .map_err(DiscountApiError::from)?;

    let outcome = state
        .validate_handler()
        .handle(ValidateCodeCommand {
            code: request.code,
            amount,
            user_id,
            plan_id,
        })
        .await;

    let response = match outcome {
        CodeValidation::Accepted {
            discount_amount,
            final_amount,
            code,
        } => ValidationResponse::accepted(
            discount_amount.minor(),
            final_amount.minor(),
            code.into(),
        ),
        CodeValidation::Rejected { reason } => ValidationResponse::rejected(reason),
    };

    Ok(Json(response))
}

/// POST /redeem - record a redemption after a successful validation.
pub async fn redeem_code(
    State(state): State<DiscountAppState>,
    Json(request): Json<RedeemCodeRequest>,
) -> Result<impl IntoResponse, DiscountApiError> {
    let code_id = parse_code_id(&request.code_id)?;
    let user_id = parse_user_id(&request.user_id)?;

    state
        .redeem_handler()
        .handle(RedeemCodeCommand { code_id, user_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST / - create a discount code.
pub async fn create_code(
    State(state): State<DiscountAppState>,
    Json(request): Json<CreateCodeRequest>,
) -> Result<impl IntoResponse, DiscountApiError> {
    let value = parse_discount_value(&request.kind, request.value)?;
    let min_purchase = request
        .min_purchase
        .map(|m| parse_money("min_purchase", m))
        .transpose()?;
    let max_discount = request
        .max_discount
        .map(|m| parse_money("max_discount", m))
        .transpose()?;
    let applicable_plans = parse_plans(&request.applicable_plans)?;

    let record = state
        .create_handler()
        .handle(CreateCodeCommand {
            code: request.code,
            value,
            min_purchase,
            max_discount,
            applicable_plans,
            valid_from: request.valid_from,
            valid_to: request.valid_to,
            usage_limit: request.usage_limit,
            status: request.status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CodeResponse::from(record))))
}

/// GET / - list active, unexpired codes.
pub async fn list_active_codes(
    State(state): State<DiscountAppState>,
) -> Result<impl IntoResponse, DiscountApiError> {
    let codes = state.list_handler().handle().await;
    let response: Vec<CodeResponse> = codes.into_iter().map(CodeResponse::from).collect();
    Ok(Json(response))
}

/// PATCH /:id - merge a partial update into a code.
pub async fn update_code(
    State(state): State<DiscountAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCodeRequest>,
) -> Result<impl IntoResponse, DiscountApiError> {
    let id = parse_code_id(&id)?;

    let value = match (&request.kind, request.value) {
        (Some(kind), Some(value)) => Some(parse_discount_value(kind, value)?),
        (None, None) => None,
        _ => {
            return Err(DiscountApiError::BadRequest(
                "kind and value must be supplied together".to_string(),
            ))
        }
    };

    let patch = DiscountCodePatch {
        value,
        min_purchase: request
            .min_purchase
            .map(|m| parse_money("min_purchase", m))
            .transpose()?,
        max_discount: request
            .max_discount
            .map(|m| parse_money("max_discount", m))
            .transpose()?,
        applicable_plans: request
            .applicable_plans
            .as_deref()
            .map(parse_plans)
            .transpose()?,
        valid_from: request.valid_from,
        valid_to: request.valid_to,
        usage_limit: request.usage_limit,
        status: request.status,
    };

    let record = state
        .update_handler()
        .handle(UpdateCodeCommand { id, patch })
        .await?;

    Ok(Json(CodeResponse::from(record)))
}

/// DELETE /:id - remove a code unconditionally.
pub async fn delete_code(
    State(state): State<DiscountAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DiscountApiError> {
    let id = parse_code_id(&id)?;
    state.delete_handler().handle(DeleteCodeCommand { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
