//! Discount code engine: the aggregate, the validation gates, and the
//! redemption bookkeeping rules.

mod aggregate;
mod code;
mod errors;
mod evaluation;
mod status;
mod value;

pub use aggregate::{
    DiscountCode, DiscountCodePatch, NewDiscountCode, RedemptionBlock,
};
pub use code::CodeKey;
pub use errors::DiscountError;
pub use evaluation::{evaluate, Evaluation, PurchaseContext, RejectionReason};
pub use status::CodeStatus;
pub use value::DiscountValue;
