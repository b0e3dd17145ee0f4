//! CreateTagHandler - Command handler for creating document tags.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TagId, Timestamp};
use crate::domain::tag::{validate_color, DocumentTag, TagName};
use crate::ports::TagRepository;

/// Command to create a document tag.
#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    pub name: String,
    pub color: Option<String>,
}

/// Handler for tag creation.
pub struct CreateTagHandler {
    repository: Arc<dyn TagRepository>,
}

impl CreateTagHandler {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTagCommand) -> Result<DocumentTag, DomainError> {
        let name = TagName::try_new(&cmd.name)?;
        if let Some(color) = &cmd.color {
            validate_color(color)?;
        }

        let tag = DocumentTag::create(TagId::new(), name, cmd.color, Timestamp::now());
        self.repository.insert(&tag).await?;
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTagRepository {
        inserted: Mutex<Vec<DocumentTag>>,
    }

    #[async_trait]
    impl TagRepository for MockTagRepository {
        async fn insert(&self, tag: &DocumentTag) -> Result<(), DomainError> {
            self.inserted.lock().unwrap().push(tag.clone());
            Ok(())
        }

        async fn update(&self, _tag: &DocumentTag) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &TagId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &TagId) -> Result<Option<DocumentTag>, DomainError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<DocumentTag>, DomainError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn creates_tag_with_trimmed_name() {
        let repo = Arc::new(MockTagRepository {
            inserted: Mutex::new(Vec::new()),
        });
        let handler = CreateTagHandler::new(repo.clone());

        let tag = handler
            .handle(CreateTagCommand {
                name: "  Warranty  ".to_string(),
                color: Some("#FF8800".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(tag.name.as_str(), "Warranty");
        assert_eq!(repo.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_bad_color() {
        let repo = Arc::new(MockTagRepository {
            inserted: Mutex::new(Vec::new()),
        });
        let handler = CreateTagHandler::new(repo.clone());

        let result = handler
            .handle(CreateTagCommand {
                name: "Warranty".to_string(),
                color: Some("orange".to_string()),
            })
            .await;

        assert!(result.is_err());
        assert!(repo.inserted.lock().unwrap().is_empty());
    }
}
