//! HTTP server settings.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::SettingsError;

/// Where and how the API listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Deployment environment.
    #[serde(default)]
    pub environment: Environment,

    /// `tracing` filter directive for the subscriber.
    #[serde(default = "defaults::log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds, enforced by the timeout layer.
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Comma-separated CORS origins. Empty means allow any origin, which is
    /// only acceptable outside production.
    #[serde(default)]
    pub cors_origins: Option<String>,
}

/// Deployment environment the process believes it runs in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// The socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// True when running in production.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// CORS origins split out of the comma-separated setting.
    pub fn cors_origins_list(&self) -> Vec<String> {
        match &self.cors_origins {
            Some(raw) => raw.split(',').map(|o| o.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.port == 0 {
            return Err(SettingsError::PortIsZero);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(SettingsError::TimeoutOutOfRange);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            environment: Environment::Development,
            log_level: defaults::log_level(),
            request_timeout_secs: defaults::request_timeout_secs(),
            cors_origins: None,
        }
    }
}

mod defaults {
    pub fn host() -> String {
        "0.0.0.0".to_string()
    }

    pub fn port() -> u16 {
        8080
    }

    pub fn log_level() -> String {
        "info,breezeway_admin=debug,sqlx=warn".to_string()
    }

    pub fn request_timeout_secs() -> u64 {
        30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_everywhere_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.is_production());
    }

    #[test]
    fn zero_port_fails_validation() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SettingsError::PortIsZero)));
    }

    #[test]
    fn timeout_bounds_are_enforced() {
        let mut config = ServerConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.request_timeout_secs = 301;
        assert!(config.validate().is_err());
        config.request_timeout_secs = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = ServerConfig {
            cors_origins: Some("https://a.example, https://b.example".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.cors_origins_list(),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn missing_cors_setting_means_empty_list() {
        assert!(ServerConfig::default().cors_origins_list().is_empty());
    }
}
