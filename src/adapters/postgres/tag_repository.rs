//! PostgreSQL implementation of TagRepository.

use crate::domain::foundation::{DomainError, ErrorCode, TagId, Timestamp};
use crate::domain::tag::{DocumentTag, TagName};
use crate::ports::TagRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the TagRepository port.
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TagRow {
    id: Uuid,
    name: String,
    color: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for DocumentTag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        let name = TagName::try_new(&row.name)
            .map_err(|e| DomainError::database(format!("Invalid stored tag name: {}", e)))?;
        Ok(DocumentTag {
            id: TagId::from_uuid(row.id),
            name,
            color: row.color,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn insert(&self, tag: &DocumentTag) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO document_tags (id, name, color, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(tag.id.as_uuid())
        .bind(tag.name.as_str())
        .bind(&tag.color)
        .bind(tag.created_at.as_datetime())
        .bind(tag.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("document_tags_name_key") {
                    return DomainError::new(
                        ErrorCode::DuplicateTag,
                        format!("Tag '{}' already exists", tag.name),
                    );
                }
            }
            DomainError::database(format!("Failed to insert tag: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, tag: &DocumentTag) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE document_tags SET name = $2, color = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(tag.id.as_uuid())
        .bind(tag.name.as_str())
        .bind(&tag.color)
        .bind(tag.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update tag: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::TagNotFound, "Tag not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &TagId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM document_tags WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete tag: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::TagNotFound, "Tag not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &TagId) -> Result<Option<DocumentTag>, DomainError> {
        let row: Option<TagRow> = sqlx::query_as(
            "SELECT id, name, color, created_at, updated_at FROM document_tags WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find tag: {}", e)))?;

        row.map(DocumentTag::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<DocumentTag>, DomainError> {
        let rows: Vec<TagRow> = sqlx::query_as(
            "SELECT id, name, color, created_at, updated_at FROM document_tags ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list tags: {}", e)))?;

        rows.into_iter().map(DocumentTag::try_from).collect()
    }
}
