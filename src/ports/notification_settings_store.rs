//! Notification settings persistence port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::notification::NotificationSettings;

/// Store port for the installation's single notification settings record.
#[async_trait]
pub trait NotificationSettingsStore: Send + Sync {
    /// Loads the persisted settings, or `None` if never saved.
    async fn load(&self) -> Result<Option<NotificationSettings>, DomainError>;

    /// Saves the settings, replacing any previous record.
    async fn save(&self, settings: &NotificationSettings) -> Result<(), DomainError>;
}
