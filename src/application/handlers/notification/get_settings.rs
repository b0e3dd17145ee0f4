//! GetNotificationSettingsHandler - Query handler for the settings screen.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::Timestamp;
use crate::domain::notification::NotificationSettings;
use crate::ports::NotificationSettingsStore;

/// Handler loading the installation's notification settings.
pub struct GetNotificationSettingsHandler {
    store: Arc<dyn NotificationSettingsStore>,
}

impl GetNotificationSettingsHandler {
    pub fn new(store: Arc<dyn NotificationSettingsStore>) -> Self {
        Self { store }
    }

    /// Loads settings. Never-saved installations and read failures both fall
    /// back to defaults so the settings screen always renders.
    pub async fn handle(&self) -> NotificationSettings {
        match self.store.load().await {
            Ok(Some(settings)) => settings,
            Ok(None) => NotificationSettings::defaults(Timestamp::now()),
            Err(err) => {
                warn!(error = %err, "loading notification settings failed");
                NotificationSettings::defaults(Timestamp::now())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;

    struct StubStore {
        result: Result<Option<NotificationSettings>, DomainError>,
    }

    #[async_trait]
    impl NotificationSettingsStore for StubStore {
        async fn load(&self) -> Result<Option<NotificationSettings>, DomainError> {
            self.result.clone()
        }

        async fn save(&self, _settings: &NotificationSettings) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn absent_row_falls_back_to_defaults() {
        let handler = GetNotificationSettingsHandler::new(Arc::new(StubStore {
            result: Ok(None),
        }));
        let settings = handler.handle().await;
        assert!(!settings.notify_new_requests);
        assert!(settings.recipients.is_empty());
    }

    #[tokio::test]
    async fn read_failure_falls_back_to_defaults() {
        let handler = GetNotificationSettingsHandler::new(Arc::new(StubStore {
            result: Err(DomainError::database("simulated outage")),
        }));
        let settings = handler.handle().await;
        assert!(!settings.notify_violations);
    }
}
