//! Document tag repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TagId};
use crate::domain::tag::DocumentTag;

/// Repository port for document tag persistence.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Persists a new tag.
    ///
    /// # Errors
    ///
    /// - `DuplicateTag` if a tag with the same name exists
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, tag: &DocumentTag) -> Result<(), DomainError>;

    /// Overwrites an existing tag.
    async fn update(&self, tag: &DocumentTag) -> Result<(), DomainError>;

    /// Removes a tag. Documents keep working; the tag simply disappears
    /// from them.
    async fn delete(&self, id: &TagId) -> Result<(), DomainError>;

    /// Finds a tag by id.
    async fn find_by_id(&self, id: &TagId) -> Result<Option<DocumentTag>, DomainError>;

    /// Lists all tags, ordered by name.
    async fn list(&self) -> Result<Vec<DocumentTag>, DomainError>;
}
