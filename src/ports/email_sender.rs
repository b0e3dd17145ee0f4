//! Outbound email port.
//!
//! A passthrough to the email provider: no templating, no queuing. The
//! caller composes the message; the adapter delivers it.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::notification::EmailMessage;

/// Port for sending a single email message.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// - `ExternalServiceError` when the provider rejects or is unreachable
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError>;
}
