//! ListTagsHandler - Query handler for the tag listing.

use std::sync::Arc;

use tracing::warn;

use crate::domain::tag::DocumentTag;
use crate::ports::TagRepository;

/// Handler listing all document tags.
pub struct ListTagsHandler {
    repository: Arc<dyn TagRepository>,
}

impl ListTagsHandler {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    /// Lists tags; degrades to an empty list on store failure.
    pub async fn handle(&self) -> Vec<DocumentTag> {
        match self.repository.list().await {
            Ok(tags) => tags,
            Err(err) => {
                warn!(error = %err, "listing tags failed");
                Vec::new()
            }
        }
    }
}
