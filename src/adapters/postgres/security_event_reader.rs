//! PostgreSQL implementation of SecurityEventReader.

use crate::domain::foundation::{DomainError, SecurityEventId, Timestamp, UserId};
use crate::domain::security::{
    SecurityEvent, SecurityEventFilter, SecurityEventKind, Severity,
};
use crate::ports::SecurityEventReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SecurityEventReader port.
pub struct PostgresSecurityEventReader {
    pool: PgPool,
}

impl PostgresSecurityEventReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    kind: String,
    severity: String,
    actor: Option<String>,
    detail: String,
    source_ip: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for SecurityEvent {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let actor = row
            .actor
            .map(|a| {
                UserId::new(a)
                    .map_err(|e| DomainError::database(format!("Invalid stored actor: {}", e)))
            })
            .transpose()?;

        Ok(SecurityEvent {
            id: SecurityEventId::from_uuid(row.id),
            kind: parse_kind(&row.kind)?,
            severity: parse_severity(&row.severity)?,
            actor,
            detail: row.detail,
            source_ip: row.source_ip,
            occurred_at: Timestamp::from_datetime(row.occurred_at),
        })
    }
}

fn parse_kind(s: &str) -> Result<SecurityEventKind, DomainError> {
    match s {
        "auth_failure" => Ok(SecurityEventKind::AuthFailure),
        "permission_denied" => Ok(SecurityEventKind::PermissionDenied),
        "rate_limit_exceeded" => Ok(SecurityEventKind::RateLimitExceeded),
        "suspicious_upload" => Ok(SecurityEventKind::SuspiciousUpload),
        _ => Err(DomainError::database(format!("Invalid event kind: {}", s))),
    }
}

fn parse_severity(s: &str) -> Result<Severity, DomainError> {
    match s {
        "info" => Ok(Severity::Info),
        "warning" => Ok(Severity::Warning),
        "critical" => Ok(Severity::Critical),
        _ => Err(DomainError::database(format!("Invalid severity: {}", s))),
    }
}

fn severity_rank(severity: Severity) -> i16 {
    match severity {
        Severity::Info => 0,
        Severity::Warning => 1,
        Severity::Critical => 2,
    }
}

#[async_trait]
impl SecurityEventReader for PostgresSecurityEventReader {
    async fn list(
        &self,
        filter: &SecurityEventFilter,
    ) -> Result<Vec<SecurityEvent>, DomainError> {
        let min_rank = filter.min_severity.map(severity_rank).unwrap_or(0);
        let since = filter
            .since
            .map(|t| *t.as_datetime())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let limit = i64::from(filter.limit.unwrap_or(100));

        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, kind, severity, actor, detail, source_ip, occurred_at
            FROM security_events
            WHERE severity_rank >= $1 AND occurred_at >= $2
            ORDER BY occurred_at DESC
            LIMIT $3
            "#,
        )
        .bind(min_rank)
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list security events: {}", e)))?;

        rows.into_iter().map(SecurityEvent::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind_covers_all_variants() {
        assert_eq!(parse_kind("auth_failure").unwrap(), SecurityEventKind::AuthFailure);
        assert_eq!(
            parse_kind("permission_denied").unwrap(),
            SecurityEventKind::PermissionDenied
        );
        assert_eq!(
            parse_kind("rate_limit_exceeded").unwrap(),
            SecurityEventKind::RateLimitExceeded
        );
        assert_eq!(
            parse_kind("suspicious_upload").unwrap(),
            SecurityEventKind::SuspiciousUpload
        );
        assert!(parse_kind("other").is_err());
    }

    #[test]
    fn severity_rank_preserves_ordering() {
        assert!(severity_rank(Severity::Info) < severity_rank(Severity::Warning));
        assert!(severity_rank(Severity::Warning) < severity_rank(Severity::Critical));
    }
}
