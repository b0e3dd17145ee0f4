//! Equipment field extraction port.
//!
//! Contract for reading nameplate fields off an uploaded image. The shipped
//! adapter returns fixed mock data; a vision-backed implementation would
//! satisfy the same contract.

use async_trait::async_trait;

use crate::domain::extraction::{EquipmentFields, UploadedImage};
use crate::domain::foundation::DomainError;

/// Port for extracting equipment fields from an uploaded image.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    /// Extracts nameplate fields from the referenced upload.
    async fn extract(&self, upload: &UploadedImage) -> Result<EquipmentFields, DomainError>;
}
