//! Equipment field extraction handlers.

mod extract_equipment_fields;

pub use extract_equipment_fields::ExtractEquipmentFieldsHandler;
