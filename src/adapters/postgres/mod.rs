//! PostgreSQL adapters implementing the persistence ports.

mod discount_repository;
mod notification_settings_store;
mod security_event_reader;
mod tag_repository;

pub use discount_repository::PostgresDiscountRepository;
pub use notification_settings_store::PostgresNotificationSettingsStore;
pub use security_event_reader::PostgresSecurityEventReader;
pub use tag_repository::PostgresTagRepository;
