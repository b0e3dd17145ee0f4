//! DeleteTagHandler - Command handler removing a document tag.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TagId};
use crate::ports::TagRepository;

/// Command to delete a tag.
#[derive(Debug, Clone)]
pub struct DeleteTagCommand {
    pub id: TagId,
}

/// Handler for tag deletion.
pub struct DeleteTagHandler {
    repository: Arc<dyn TagRepository>,
}

impl DeleteTagHandler {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteTagCommand) -> Result<(), DomainError> {
        self.repository.delete(&cmd.id).await
    }
}
