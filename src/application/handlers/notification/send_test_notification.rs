//! SendTestNotificationHandler - Command handler for the "send test email"
//! button on the settings screen.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::notification::EmailMessage;
use crate::ports::{EmailSender, NotificationSettingsStore};

/// Handler sending a test message to every configured recipient.
pub struct SendTestNotificationHandler {
    store: Arc<dyn NotificationSettingsStore>,
    sender: Arc<dyn EmailSender>,
}

impl SendTestNotificationHandler {
    pub fn new(store: Arc<dyn NotificationSettingsStore>, sender: Arc<dyn EmailSender>) -> Self {
        Self { store, sender }
    }

    /// Sends the test message. Returns the number of recipients reached.
    pub async fn handle(&self) -> Result<usize, DomainError> {
        // 1. Load the configured recipients.
        let settings = self.store.load().await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Notification settings have not been saved yet",
            )
        })?;

        if settings.recipients.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "No notification recipients configured",
            ));
        }

        // 2. Fan the test message out to every recipient.
        let sends = settings.recipients.iter().map(|recipient| {
            let message = EmailMessage {
                to: recipient.clone(),
                subject: "Breezeway test notification".to_string(),
                html_body: "<p>This is a test notification from your Breezeway admin \
                            dashboard. Email delivery is working.</p>"
                    .to_string(),
            };
            let sender = self.sender.clone();
            async move { sender.send(&message).await }
        });
        try_join_all(sends).await?;

        info!(recipients = settings.recipients.len(), "test notification sent");
        Ok(settings.recipients.len())
    }
}
