//! Axum router configuration for the admin endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_tag, delete_tag, extract_fields, get_settings, list_security_events, list_tags,
    send_test_notification, update_settings, update_tag, AdminAppState,
};

/// Create the admin API router.
///
/// # Routes
///
/// ## Tags
/// - `GET /tags` - List tags
/// - `POST /tags` - Create a tag
/// - `PATCH /tags/:id` - Rename/recolor a tag
/// - `DELETE /tags/:id` - Delete a tag
///
/// ## Notifications
/// - `GET /notifications` - Load settings (defaults when unsaved)
/// - `PUT /notifications` - Replace settings
/// - `POST /notifications/test` - Send a test message
///
/// ## Security Log
/// - `GET /security/events` - List events, newest first
///
/// ## Extraction
/// - `POST /extraction` - Extract equipment fields from an upload
pub fn admin_router() -> Router<AdminAppState> {
    Router::new()
        .route("/tags", get(list_tags).post(create_tag))
        .route(
            "/tags/:id",
            axum::routing::patch(update_tag).delete(delete_tag),
        )
        .route("/notifications", get(get_settings).put(update_settings))
        .route("/notifications/test", post(send_test_notification))
        .route("/security/events", get(list_security_events))
        .route("/extraction", post(extract_fields))
}
