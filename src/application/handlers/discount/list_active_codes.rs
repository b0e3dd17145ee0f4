//! ListActiveCodesHandler - Query handler for the admin code listing.
//!
//! Applies a read-time window filter on top of the lazy-expiry mechanism: a
//! record past its window but not yet observed by validation is excluded
//! here even though its persisted status still reads active.

use std::sync::Arc;

use tracing::warn;

use crate::domain::discount::DiscountCode;
use crate::domain::foundation::Timestamp;
use crate::ports::DiscountRepository;

/// Handler listing currently usable discount codes.
pub struct ListActiveCodesHandler {
    repository: Arc<dyn DiscountRepository>,
}

impl ListActiveCodesHandler {
    pub fn new(repository: Arc<dyn DiscountRepository>) -> Self {
        Self { repository }
    }

    /// Lists active, unexpired codes. Degrades to an empty list on store
    /// failure so the admin screen always renders.
    pub async fn handle(&self) -> Vec<DiscountCode> {
        match self.repository.list_active(Timestamp::now()).await {
            Ok(codes) => codes,
            Err(err) => {
                warn!(error = %err, "listing active codes failed");
                Vec::new()
            }
        }
    }
}
