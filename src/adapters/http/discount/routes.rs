//! Axum router configuration for discount code endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_code, delete_code, list_active_codes, redeem_code, update_code, validate_code,
    DiscountAppState,
};

/// Create the discount code API router.
///
/// # Routes
///
/// - `POST /validate` - Run the validation gates for a purchase
/// - `POST /redeem` - Record a redemption after validation
/// - `GET /` - List active, unexpired codes
/// - `POST /` - Create a code
/// - `PATCH /:id` - Partially update a code
/// - `DELETE /:id` - Delete a code
pub fn discount_router() -> Router<DiscountAppState> {
    Router::new()
        .route("/validate", post(validate_code))
        .route("/redeem", post(redeem_code))
        .route("/", get(list_active_codes).post(create_code))
        .route("/:id", axum::routing::patch(update_code).delete(delete_code))
}
