//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DiscountRepository` - discount code persistence + atomic redemption
//! - `TagRepository` - document tag persistence
//! - `NotificationSettingsStore` - the installation's settings record
//! - `SecurityEventReader` - read-only security log access
//! - `EmailSender` - provider passthrough for outbound email
//! - `FieldExtractor` - equipment nameplate extraction

mod discount_repository;
mod email_sender;
mod field_extractor;
mod notification_settings_store;
mod security_event_reader;
mod tag_repository;

pub use discount_repository::{DiscountRepository, RedemptionOutcome};
pub use email_sender::EmailSender;
pub use field_extractor::FieldExtractor;
pub use notification_settings_store::NotificationSettingsStore;
pub use security_event_reader::SecurityEventReader;
pub use tag_repository::TagRepository;
