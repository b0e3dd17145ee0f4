//! Email provider settings (Resend).

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::SettingsError;

/// Credentials and sender identity for the Resend passthrough.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key (`re_...`).
    pub api_key: SecretString,

    /// Address notifications are sent from.
    #[serde(default = "defaults::from_email")]
    pub from_email: String,

    /// Display name paired with the from address.
    #[serde(default = "defaults::from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// The RFC 5322 "From" header value.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let key = self.api_key.expose_secret();
        if key.is_empty() {
            return Err(SettingsError::Missing("EMAIL_API_KEY"));
        }
        if !key.starts_with("re_") {
            return Err(SettingsError::ResendKeyFormat);
        }
        if !self.from_email.contains('@') {
            return Err(SettingsError::FromAddressFormat);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::new(String::new()),
            from_email: defaults::from_email(),
            from_name: defaults::from_name(),
        }
    }
}

mod defaults {
    pub fn from_email() -> String {
        "noreply@breezeway.example".to_string()
    }

    pub fn from_name() -> String {
        "Breezeway".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_header_combines_name_and_address() {
        let config = EmailConfig {
            from_email: "support@breezeway.example".to_string(),
            from_name: "Breezeway Support".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.from_header(),
            "Breezeway Support <support@breezeway.example>"
        );
    }

    #[test]
    fn non_resend_key_fails() {
        let config = EmailConfig {
            api_key: SecretString::new("sk_wrong".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SettingsError::ResendKeyFormat)));
    }

    #[test]
    fn resend_key_passes() {
        let config = EmailConfig {
            api_key: SecretString::new("re_123456".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
