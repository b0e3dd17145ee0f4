//! Foundation value objects shared across domain modules.

mod errors;
mod ids;
mod money;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DiscountCodeId, PlanId, SecurityEventId, TagId, UserId};
pub use money::Money;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
