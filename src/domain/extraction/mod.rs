//! Equipment field extraction from uploaded nameplate photos.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Metadata about an uploaded image, as seen by the extraction boundary.
///
/// The bytes stay in object storage; the extractor receives a reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Fields read off an HVAC equipment nameplate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentFields {
    pub brand: String,
    pub model_number: String,
    pub serial_number: String,
    pub tonnage: Option<String>,
    pub refrigerant: Option<String>,
    pub manufacture_year: Option<u16>,
    /// Extractor's confidence in the reading.
    pub confidence: Percentage,
}
