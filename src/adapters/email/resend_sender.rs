//! Resend implementation of the EmailSender port.
//!
//! A thin passthrough: one POST per message to the Resend API. The sender
//! holds a pooled reqwest client and the configured from-address.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::debug;

use crate::config::EmailConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::notification::EmailMessage;
use crate::ports::EmailSender;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// EmailSender backed by the Resend HTTP API.
pub struct ResendEmailSender {
    client: Client,
    config: EmailConfig,
}

impl ResendEmailSender {
    /// Creates a sender with a dedicated pooled client.
    pub fn new(config: EmailConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, config }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), DomainError> {
        let request = SendEmailRequest {
            from: self.config.from_header(),
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::ExternalServiceError,
                    format!("Email provider unreachable: {}", e),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Email provider returned {}: {}", status, body),
            )
            .with_detail("status", status.to_string()));
        }

        debug!(to = %message.to, "email delivered to provider");
        Ok(())
    }
}
