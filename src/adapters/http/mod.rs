//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router, DTOs, and error mapping. There is no auth
//! middleware here; the deployment fronts this service with the platform
//! gateway.

pub mod admin;
pub mod discount;

pub use admin::{admin_router, AdminAppState};
pub use discount::{discount_router, DiscountAppState};
