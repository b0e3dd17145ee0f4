//! PostgreSQL connection settings.

use serde::Deserialize;
use std::time::Duration;

use super::error::SettingsError;

/// Connection pool settings for the record store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (`postgres://...`).
    pub url: String,

    /// Connections the pool keeps warm.
    #[serde(default = "defaults::min_connections")]
    pub min_connections: u32,

    /// Hard ceiling on open connections.
    #[serde(default = "defaults::max_connections")]
    pub max_connections: u32,

    /// How long an acquire may wait before it fails, in seconds. Validation
    /// reads that hit this ceiling surface as a lookup failure, not an error.
    #[serde(default = "defaults::acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Apply pending migrations at startup.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.url.is_empty() {
            return Err(SettingsError::Missing("DATABASE_URL"));
        }
        let scheme_ok =
            self.url.starts_with("postgres://") || self.url.starts_with("postgresql://");
        if !scheme_ok {
            return Err(SettingsError::DatabaseUrlScheme);
        }
        if self.min_connections > self.max_connections {
            return Err(SettingsError::PoolBounds);
        }
        if self.max_connections > 100 {
            return Err(SettingsError::PoolTooLarge);
        }
        Ok(())
    }
}

mod defaults {
    pub fn min_connections() -> u32 {
        1
    }

    pub fn max_connections() -> u32 {
        10
    }

    pub fn acquire_timeout_secs() -> u64 {
        5
    }
}
