//! Discount code HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use handlers::DiscountAppState;
pub use routes::discount_router;
