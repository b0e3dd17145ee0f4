//! UpdateTagHandler - Command handler renaming or recoloring a tag.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, TagId, Timestamp};
use crate::domain::tag::{validate_color, DocumentTag, TagName};
use crate::ports::TagRepository;

/// Command to update an existing tag. Absent fields stay unchanged.
#[derive(Debug, Clone)]
pub struct UpdateTagCommand {
    pub id: TagId,
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Handler for tag updates.
pub struct UpdateTagHandler {
    repository: Arc<dyn TagRepository>,
}

impl UpdateTagHandler {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateTagCommand) -> Result<DocumentTag, DomainError> {
        let mut tag = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::TagNotFound, "Tag not found"))?;

        let now = Timestamp::now();
        if let Some(name) = cmd.name {
            tag.rename(TagName::try_new(&name)?, now);
        }
        if let Some(color) = cmd.color {
            validate_color(&color)?;
            tag.recolor(Some(color), now);
        }

        self.repository.update(&tag).await?;
        Ok(tag)
    }
}
