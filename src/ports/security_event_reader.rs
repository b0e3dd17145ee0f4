//! Security event log read port.
//!
//! The log is written elsewhere in the platform; this backend only lists it.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::security::{SecurityEvent, SecurityEventFilter};

/// Read-only port over the security event log.
#[async_trait]
pub trait SecurityEventReader: Send + Sync {
    /// Lists events matching the filter, newest first.
    async fn list(&self, filter: &SecurityEventFilter)
        -> Result<Vec<SecurityEvent>, DomainError>;
}
