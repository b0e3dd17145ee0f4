//! HTTP handlers for the admin endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::extraction::ExtractEquipmentFieldsHandler;
use crate::application::handlers::notification::{
    GetNotificationSettingsHandler, SendTestNotificationHandler,
    UpdateNotificationSettingsCommand, UpdateNotificationSettingsHandler,
};
use crate::application::handlers::security::ListSecurityEventsHandler;
use crate::application::handlers::tags::{
    CreateTagCommand, CreateTagHandler, DeleteTagCommand, DeleteTagHandler, ListTagsHandler,
    UpdateTagCommand, UpdateTagHandler,
};
use crate::domain::extraction::UploadedImage;
use crate::domain::foundation::{DomainError, ErrorCode, TagId};
use crate::domain::security::SecurityEventFilter;
use crate::ports::{
    EmailSender, FieldExtractor, NotificationSettingsStore, SecurityEventReader, TagRepository,
};

use super::dto::{
    CreateTagRequest, ErrorResponse, ExtractFieldsRequest, SecurityEventResponse,
    SecurityEventsQuery, SettingsResponse, TagResponse, TestNotificationResponse,
    UpdateSettingsRequest, UpdateTagRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the admin endpoints.
#[derive(Clone)]
pub struct AdminAppState {
    pub tags: Arc<dyn TagRepository>,
    pub settings: Arc<dyn NotificationSettingsStore>,
    pub email: Arc<dyn EmailSender>,
    pub security_events: Arc<dyn SecurityEventReader>,
    pub extractor: Arc<dyn FieldExtractor>,
}

impl AdminAppState {
    pub fn create_tag_handler(&self) -> CreateTagHandler {
        CreateTagHandler::new(self.tags.clone())
    }

    pub fn list_tags_handler(&self) -> ListTagsHandler {
        ListTagsHandler::new(self.tags.clone())
    }

    pub fn update_tag_handler(&self) -> UpdateTagHandler {
        UpdateTagHandler::new(self.tags.clone())
    }

    pub fn delete_tag_handler(&self) -> DeleteTagHandler {
        DeleteTagHandler::new(self.tags.clone())
    }

    pub fn get_settings_handler(&self) -> GetNotificationSettingsHandler {
        GetNotificationSettingsHandler::new(self.settings.clone())
    }

    pub fn update_settings_handler(&self) -> UpdateNotificationSettingsHandler {
        UpdateNotificationSettingsHandler::new(self.settings.clone())
    }

    pub fn test_notification_handler(&self) -> SendTestNotificationHandler {
        SendTestNotificationHandler::new(self.settings.clone(), self.email.clone())
    }

    pub fn security_events_handler(&self) -> ListSecurityEventsHandler {
        ListSecurityEventsHandler::new(self.security_events.clone())
    }

    pub fn extraction_handler(&self) -> ExtractEquipmentFieldsHandler {
        ExtractEquipmentFieldsHandler::new(self.extractor.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

/// HTTP error wrapper for admin endpoints.
pub struct AdminApiError(DomainError);

impl From<DomainError> for AdminApiError {
    fn from(err: DomainError) -> Self {
        AdminApiError(err)
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> axum::response::Response {
        let err = self.0;
        let status = match err.code {
            ErrorCode::TagNotFound | ErrorCode::CodeNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DuplicateTag | ErrorCode::DuplicateCode | ErrorCode::ConcurrencyConflict => {
                StatusCode::CONFLICT
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::ExternalServiceError => StatusCode::BAD_GATEWAY,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An internal error occurred".to_string()
        } else {
            err.message
        };
        (status, Json(ErrorResponse::new(err.code.to_string(), message))).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tag Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /tags - create a tag.
pub async fn create_tag(
    State(state): State<AdminAppState>,
    Json(request): Json<CreateTagRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let tag = state
        .create_tag_handler()
        .handle(CreateTagCommand {
            name: request.name,
            color: request.color,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}

/// GET /tags - list all tags.
pub async fn list_tags(State(state): State<AdminAppState>) -> impl IntoResponse {
    let tags = state.list_tags_handler().handle().await;
    let response: Vec<TagResponse> = tags.into_iter().map(TagResponse::from).collect();
    Json(response)
}

/// PATCH /tags/:id - rename or recolor a tag.
pub async fn update_tag(
    State(state): State<AdminAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTagRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let id = parse_tag_id(&id)?;
    let tag = state
        .update_tag_handler()
        .handle(UpdateTagCommand {
            id,
            name: request.name,
            color: request.color,
        })
        .await?;
    Ok(Json(TagResponse::from(tag)))
}

/// DELETE /tags/:id - delete a tag.
pub async fn delete_tag(
    State(state): State<AdminAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminApiError> {
    let id = parse_tag_id(&id)?;
    state.delete_tag_handler().handle(DeleteTagCommand { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_tag_id(raw: &str) -> Result<TagId, AdminApiError> {
    TagId::from_str(raw).map_err(|_| {
        AdminApiError(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid tag id: {}", raw),
        ))
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Notification Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /notifications - load the settings (defaults when unsaved).
pub async fn get_settings(State(state): State<AdminAppState>) -> impl IntoResponse {
    let settings = state.get_settings_handler().handle().await;
    Json(SettingsResponse::from(settings))
}

/// PUT /notifications - replace the settings.
pub async fn update_settings(
    State(state): State<AdminAppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let settings = state
        .update_settings_handler()
        .handle(UpdateNotificationSettingsCommand {
            notify_new_requests: request.notify_new_requests,
            notify_violations: request.notify_violations,
            send_daily_summary: request.send_daily_summary,
            recipients: request.recipients,
        })
        .await?;
    Ok(Json(SettingsResponse::from(settings)))
}

/// POST /notifications/test - send a test message to every recipient.
pub async fn send_test_notification(
    State(state): State<AdminAppState>,
) -> Result<impl IntoResponse, AdminApiError> {
    let recipients_reached = state.test_notification_handler().handle().await?;
    Ok(Json(TestNotificationResponse { recipients_reached }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Security Log Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /security/events - list recorded events, newest first.
pub async fn list_security_events(
    State(state): State<AdminAppState>,
    Query(query): Query<SecurityEventsQuery>,
) -> impl IntoResponse {
    let events = state
        .security_events_handler()
        .handle(SecurityEventFilter {
            min_severity: query.min_severity,
            since: query.since,
            limit: query.limit,
        })
        .await;
    let response: Vec<SecurityEventResponse> =
        events.into_iter().map(SecurityEventResponse::from).collect();
    Json(response)
}

// ════════════════════════════════════════════════════════════════════════════════
// Extraction Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /extraction - extract equipment fields from an upload.
pub async fn extract_fields(
    State(state): State<AdminAppState>,
    Json(request): Json<ExtractFieldsRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let fields = state
        .extraction_handler()
        .handle(UploadedImage {
            file_name: request.file_name,
            content_type: request.content_type,
            size_bytes: request.size_bytes,
        })
        .await?;
    Ok(Json(fields))
}
