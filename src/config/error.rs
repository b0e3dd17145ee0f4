//! Configuration error types.

use thiserror::Error;

/// Top-level configuration failure: the environment could not be read, or a
/// value failed semantic validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] SettingsError),
}

/// A semantically invalid configuration value.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("server port must be non-zero")]
    PortIsZero,

    #[error("request timeout must be between 1 and 300 seconds")]
    TimeoutOutOfRange,

    #[error("database url must use the postgres:// or postgresql:// scheme")]
    DatabaseUrlScheme,

    #[error("database pool min_connections exceeds max_connections")]
    PoolBounds,

    #[error("database pool max_connections exceeds 100")]
    PoolTooLarge,

    #[error("email api key does not look like a Resend key (re_...)")]
    ResendKeyFormat,

    #[error("from_email is not a plausible email address")]
    FromAddressFormat,
}
