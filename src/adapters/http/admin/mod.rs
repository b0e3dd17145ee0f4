//! Admin HTTP adapter: tags, notifications, security log, extraction.

mod dto;
mod handlers;
mod routes;

pub use handlers::AdminAppState;
pub use routes::admin_router;
