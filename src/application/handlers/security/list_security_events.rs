//! ListSecurityEventsHandler - Query handler for the security log viewer.

use std::sync::Arc;

use tracing::warn;

use crate::domain::security::{SecurityEvent, SecurityEventFilter};
use crate::ports::SecurityEventReader;

/// Default number of rows when the caller does not ask for a limit.
const DEFAULT_LIMIT: u32 = 100;

/// Upper bound on rows a single request may return.
const MAX_LIMIT: u32 = 500;

/// Handler listing recorded security events.
pub struct ListSecurityEventsHandler {
    reader: Arc<dyn SecurityEventReader>,
}

impl ListSecurityEventsHandler {
    pub fn new(reader: Arc<dyn SecurityEventReader>) -> Self {
        Self { reader }
    }

    /// Lists events matching the filter, newest first. Degrades to an empty
    /// list on store failure so the log screen always renders.
    pub async fn handle(&self, mut filter: SecurityEventFilter) -> Vec<SecurityEvent> {
        filter.limit = Some(filter.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT));

        match self.reader.list(&filter).await {
            Ok(events) => events,
            Err(err) => {
                warn!(error = %err, "listing security events failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockReader {
        seen_filters: Mutex<Vec<SecurityEventFilter>>,
        fail: bool,
    }

    #[async_trait]
    impl SecurityEventReader for MockReader {
        async fn list(
            &self,
            filter: &SecurityEventFilter,
        ) -> Result<Vec<SecurityEvent>, DomainError> {
            if self.fail {
                return Err(DomainError::database("simulated outage"));
            }
            self.seen_filters.lock().unwrap().push(filter.clone());
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn default_limit_is_applied() {
        let reader = Arc::new(MockReader {
            seen_filters: Mutex::new(Vec::new()),
            fail: false,
        });
        let handler = ListSecurityEventsHandler::new(reader.clone());

        handler.handle(SecurityEventFilter::default()).await;

        let filters = reader.seen_filters.lock().unwrap();
        assert_eq!(filters[0].limit, Some(DEFAULT_LIMIT));
    }

    #[tokio::test]
    async fn oversized_limit_is_capped() {
        let reader = Arc::new(MockReader {
            seen_filters: Mutex::new(Vec::new()),
            fail: false,
        });
        let handler = ListSecurityEventsHandler::new(reader.clone());

        handler
            .handle(SecurityEventFilter {
                limit: Some(10_000),
                ..Default::default()
            })
            .await;

        let filters = reader.seen_filters.lock().unwrap();
        assert_eq!(filters[0].limit, Some(MAX_LIMIT));
    }

    #[tokio::test]
    async fn store_failure_degrades_to_empty_list() {
        let reader = Arc::new(MockReader {
            seen_filters: Mutex::new(Vec::new()),
            fail: true,
        });
        let handler = ListSecurityEventsHandler::new(reader);

        assert!(handler.handle(SecurityEventFilter::default()).await.is_empty());
    }
}
