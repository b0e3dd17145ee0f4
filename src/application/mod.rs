//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (writes) propagate store failures; query handlers
//! (reads) degrade to empty or default results.

pub mod handlers;

pub use handlers::discount::{
    CodeValidation, CreateCodeCommand, CreateCodeHandler, DeleteCodeCommand,
    DeleteCodeHandler, ListActiveCodesHandler, RedeemCodeCommand, RedeemCodeHandler,
    UpdateCodeCommand, UpdateCodeHandler, ValidateCodeCommand, ValidateCodeHandler,
};
