//! Security event log entries.
//!
//! Events are recorded elsewhere in the platform; this backend only reads
//! them for the admin log viewer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SecurityEventId, Timestamp, UserId};

/// A recorded security or policy-violation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: SecurityEventId,
    pub kind: SecurityEventKind,
    pub severity: Severity,
    /// The user involved, when known.
    pub actor: Option<UserId>,
    /// Human-readable description of what happened.
    pub detail: String,
    /// Source IP as recorded, when available.
    pub source_ip: Option<String>,
    pub occurred_at: Timestamp,
}

/// Category of a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventKind {
    AuthFailure,
    PermissionDenied,
    RateLimitExceeded,
    SuspiciousUpload,
}

/// Severity of a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Filter for the event listing.
#[derive(Debug, Clone, Default)]
pub struct SecurityEventFilter {
    /// Only events at or above this severity.
    pub min_severity: Option<Severity>,
    /// Only events at or after this instant.
    pub since: Option<Timestamp>,
    /// Maximum rows to return; the handler applies a default and a cap.
    pub limit: Option<u32>,
}
