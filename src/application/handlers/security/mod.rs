//! Security event log handlers.

mod list_security_events;

pub use list_security_events::ListSecurityEventsHandler;
