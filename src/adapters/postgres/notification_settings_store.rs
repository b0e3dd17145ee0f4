//! PostgreSQL implementation of NotificationSettingsStore.
//!
//! A single-row table keyed by a constant id; saving is an upsert.

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::{EmailAddress, NotificationSettings};
use crate::ports::NotificationSettingsStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL implementation of the NotificationSettingsStore port.
pub struct PostgresNotificationSettingsStore {
    pool: PgPool,
}

impl PostgresNotificationSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    notify_new_requests: bool,
    notify_violations: bool,
    send_daily_summary: bool,
    recipients: Vec<String>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SettingsRow> for NotificationSettings {
    type Error = DomainError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        let recipients = row
            .recipients
            .iter()
            .map(|raw| {
                EmailAddress::try_new(raw)
                    .map_err(|e| DomainError::database(format!("Invalid stored recipient: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NotificationSettings {
            notify_new_requests: row.notify_new_requests,
            notify_violations: row.notify_violations,
            send_daily_summary: row.send_daily_summary,
            recipients,
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl NotificationSettingsStore for PostgresNotificationSettingsStore {
    async fn load(&self) -> Result<Option<NotificationSettings>, DomainError> {
        let row: Option<SettingsRow> = sqlx::query_as(
            "SELECT notify_new_requests, notify_violations, send_daily_summary, \
             recipients, updated_at FROM notification_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load settings: {}", e)))?;

        row.map(NotificationSettings::try_from).transpose()
    }

    async fn save(&self, settings: &NotificationSettings) -> Result<(), DomainError> {
        let recipients: Vec<String> = settings
            .recipients
            .iter()
            .map(|r| r.as_str().to_string())
            .collect();

        sqlx::query(
            r#"
            INSERT INTO notification_settings (
                id, notify_new_requests, notify_violations, send_daily_summary,
                recipients, updated_at
            ) VALUES (1, $1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                notify_new_requests = EXCLUDED.notify_new_requests,
                notify_violations = EXCLUDED.notify_violations,
                send_daily_summary = EXCLUDED.send_daily_summary,
                recipients = EXCLUDED.recipients,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(settings.notify_new_requests)
        .bind(settings.notify_violations)
        .bind(settings.send_daily_summary)
        .bind(recipients)
        .bind(settings.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save settings: {}", e)))?;

        Ok(())
    }
}
