//! Email notification settings.
//!
//! One settings record per installation. Absent storage rows fall back to
//! [`NotificationSettings::default`], which keeps every alert switched off.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Persisted notification preferences for the installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Send an email when a new service request arrives.
    pub notify_new_requests: bool,
    /// Send an email when a security violation is recorded.
    pub notify_violations: bool,
    /// Send a daily activity summary.
    pub send_daily_summary: bool,
    /// Addresses that receive the notifications.
    pub recipients: Vec<EmailAddress>,
    pub updated_at: Timestamp,
}

impl NotificationSettings {
    pub fn defaults(now: Timestamp) -> Self {
        Self {
            notify_new_requests: false,
            notify_violations: false,
            send_daily_summary: false,
            recipients: Vec::new(),
            updated_at: now,
        }
    }
}

/// A syntactically plausible email address.
///
/// Only shape is checked; deliverability is the email provider's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn try_new(address: &str) -> Result<Self, ValidationError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ValidationError::invalid_format("email", "missing @"));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An outbound email, ready for the provider passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_addresses_pass() {
        assert!(EmailAddress::try_new("ops@breezeway.example").is_ok());
        assert!(EmailAddress::try_new("  padded@breezeway.example ").is_ok());
    }

    #[test]
    fn implausible_addresses_fail() {
        assert!(EmailAddress::try_new("").is_err());
        assert!(EmailAddress::try_new("no-at-sign").is_err());
        assert!(EmailAddress::try_new("@missing-local.example").is_err());
        assert!(EmailAddress::try_new("missing-domain@").is_err());
        assert!(EmailAddress::try_new("no-tld@localhost").is_err());
    }

    #[test]
    fn defaults_keep_all_alerts_off() {
        let settings = NotificationSettings::defaults(Timestamp::now());
        assert!(!settings.notify_new_requests);
        assert!(!settings.notify_violations);
        assert!(!settings.send_daily_summary);
        assert!(settings.recipients.is_empty());
    }
}
