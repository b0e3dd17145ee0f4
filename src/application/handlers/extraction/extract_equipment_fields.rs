//! ExtractEquipmentFieldsHandler - Command handler for nameplate extraction.

use std::sync::Arc;

use crate::domain::extraction::{EquipmentFields, UploadedImage};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::FieldExtractor;

/// Uploads larger than this are refused before reaching the extractor.
const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Handler passing an upload through the field extractor.
pub struct ExtractEquipmentFieldsHandler {
    extractor: Arc<dyn FieldExtractor>,
}

impl ExtractEquipmentFieldsHandler {
    pub fn new(extractor: Arc<dyn FieldExtractor>) -> Self {
        Self { extractor }
    }

    pub async fn handle(&self, upload: UploadedImage) -> Result<EquipmentFields, DomainError> {
        if !upload.content_type.starts_with("image/") {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Unsupported content type: {}", upload.content_type),
            ));
        }
        if upload.size_bytes > MAX_UPLOAD_BYTES {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Upload exceeds the 20 MiB limit",
            ));
        }

        self.extractor.extract(&upload).await
    }
}
