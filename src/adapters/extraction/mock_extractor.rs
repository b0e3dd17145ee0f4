//! Mock implementation of the FieldExtractor port.
//!
//! The vision-backed extractor is not built yet; this adapter returns a
//! fixed catalog entry so the upload flow and the review UI can be
//! exercised end to end. Swap in a real implementation behind the same
//! port when the vision integration lands.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::domain::extraction::{EquipmentFields, UploadedImage};
use crate::domain::foundation::{DomainError, Percentage};
use crate::ports::FieldExtractor;

static MOCK_FIELDS: Lazy<EquipmentFields> = Lazy::new(|| EquipmentFields {
    brand: "Carrier".to_string(),
    model_number: "24ACC636A003".to_string(),
    serial_number: "3523X00142".to_string(),
    tonnage: Some("3.0".to_string()),
    refrigerant: Some("R-410A".to_string()),
    manufacture_year: Some(2023),
    confidence: Percentage::HUNDRED,
});

/// FieldExtractor that always returns the same catalog entry.
pub struct MockFieldExtractor;

#[async_trait]
impl FieldExtractor for MockFieldExtractor {
    async fn extract(&self, upload: &UploadedImage) -> Result<EquipmentFields, DomainError> {
        debug!(
            file_name = %upload.file_name,
            size_bytes = upload.size_bytes,
            "mock extraction requested"
        );
        Ok(MOCK_FIELDS.clone())
    }
}
