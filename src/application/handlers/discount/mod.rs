//! Discount engine handlers: validation, redemption, and lifecycle CRUD.

mod create_code;
mod delete_code;
mod list_active_codes;
mod redeem_code;
mod update_code;
mod validate_code;

pub use create_code::{CreateCodeCommand, CreateCodeHandler};
pub use delete_code::{DeleteCodeCommand, DeleteCodeHandler};
pub use list_active_codes::ListActiveCodesHandler;
pub use redeem_code::{RedeemCodeCommand, RedeemCodeHandler};
pub use update_code::{UpdateCodeCommand, UpdateCodeHandler};
pub use validate_code::{CodeValidation, ValidateCodeCommand, ValidateCodeHandler};
