//! UpdateNotificationSettingsHandler - Command handler saving settings.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::{EmailAddress, NotificationSettings};
use crate::ports::NotificationSettingsStore;

/// Command carrying the full settings form.
#[derive(Debug, Clone)]
pub struct UpdateNotificationSettingsCommand {
    pub notify_new_requests: bool,
    pub notify_violations: bool,
    pub send_daily_summary: bool,
    pub recipients: Vec<String>,
}

/// Handler saving the installation's notification settings.
pub struct UpdateNotificationSettingsHandler {
    store: Arc<dyn NotificationSettingsStore>,
}

impl UpdateNotificationSettingsHandler {
    pub fn new(store: Arc<dyn NotificationSettingsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateNotificationSettingsCommand,
    ) -> Result<NotificationSettings, DomainError> {
        let recipients = cmd
            .recipients
            .iter()
            .map(|raw| EmailAddress::try_new(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let settings = NotificationSettings {
            notify_new_requests: cmd.notify_new_requests,
            notify_violations: cmd.notify_violations,
            send_daily_summary: cmd.send_daily_summary,
            recipients,
            updated_at: Timestamp::now(),
        };

        // Write intent: failures propagate to the caller.
        self.store.save(&settings).await?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockStore {
        saved: Mutex<Vec<NotificationSettings>>,
    }

    #[async_trait]
    impl NotificationSettingsStore for MockStore {
        async fn load(&self) -> Result<Option<NotificationSettings>, DomainError> {
            Ok(None)
        }

        async fn save(&self, settings: &NotificationSettings) -> Result<(), DomainError> {
            self.saved.lock().unwrap().push(settings.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn saves_settings_with_parsed_recipients() {
        let store = Arc::new(MockStore {
            saved: Mutex::new(Vec::new()),
        });
        let handler = UpdateNotificationSettingsHandler::new(store.clone());

        let settings = handler
            .handle(UpdateNotificationSettingsCommand {
                notify_new_requests: true,
                notify_violations: true,
                send_daily_summary: false,
                recipients: vec!["ops@breezeway.example".to_string()],
            })
            .await
            .unwrap();

        assert!(settings.notify_new_requests);
        assert_eq!(settings.recipients.len(), 1);
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_recipient_rejects_without_saving() {
        let store = Arc::new(MockStore {
            saved: Mutex::new(Vec::new()),
        });
        let handler = UpdateNotificationSettingsHandler::new(store.clone());

        let result = handler
            .handle(UpdateNotificationSettingsCommand {
                notify_new_requests: true,
                notify_violations: false,
                send_daily_summary: false,
                recipients: vec!["not-an-email".to_string()],
            })
            .await;

        assert!(result.is_err());
        assert!(store.saved.lock().unwrap().is_empty());
    }
}
