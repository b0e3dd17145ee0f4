//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx-backed persistence
//! - `email` - Resend passthrough
//! - `extraction` - mock field extractor
//! - `memory` - in-memory doubles for tests and local development
//! - `http` - axum REST surface

pub mod email;
pub mod extraction;
pub mod http;
pub mod memory;
pub mod postgres;

pub use email::ResendEmailSender;
pub use extraction::MockFieldExtractor;
pub use http::{admin_router, discount_router, AdminAppState, DiscountAppState};
pub use memory::InMemoryDiscountRepository;
pub use postgres::{
    PostgresDiscountRepository, PostgresNotificationSettingsStore,
    PostgresSecurityEventReader, PostgresTagRepository,
};
