//! HTTP DTOs for the admin endpoints (tags, notifications, security log,
//! extraction).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::notification::NotificationSettings;
use crate::domain::security::{SecurityEvent, SecurityEventKind, Severity};
use crate::domain::tag::DocumentTag;

// ════════════════════════════════════════════════════════════════════════════════
// Tags
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTagRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DocumentTag> for TagResponse {
    fn from(tag: DocumentTag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.as_str().to_string(),
            color: tag.color,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Notification Settings
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsRequest {
    pub notify_new_requests: bool,
    pub notify_violations: bool,
    pub send_daily_summary: bool,
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub notify_new_requests: bool,
    pub notify_violations: bool,
    pub send_daily_summary: bool,
    pub recipients: Vec<String>,
    pub updated_at: Timestamp,
}

impl From<NotificationSettings> for SettingsResponse {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            notify_new_requests: settings.notify_new_requests,
            notify_violations: settings.notify_violations,
            send_daily_summary: settings.send_daily_summary,
            recipients: settings
                .recipients
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
            updated_at: settings.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestNotificationResponse {
    pub recipients_reached: usize,
}

// ════════════════════════════════════════════════════════════════════════════════
// Security Events
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityEventsQuery {
    #[serde(default)]
    pub min_severity: Option<Severity>,
    #[serde(default)]
    pub since: Option<Timestamp>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityEventResponse {
    pub id: String,
    pub kind: SecurityEventKind,
    pub severity: Severity,
    pub actor: Option<String>,
    pub detail: String,
    pub source_ip: Option<String>,
    pub occurred_at: Timestamp,
}

impl From<SecurityEvent> for SecurityEventResponse {
    fn from(event: SecurityEvent) -> Self {
        Self {
            id: event.id.to_string(),
            kind: event.kind,
            severity: event.severity,
            actor: event.actor.map(|a| a.as_str().to_string()),
            detail: event.detail,
            source_ip: event.source_ip,
            occurred_at: event.occurred_at,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Extraction
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractFieldsRequest {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

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
