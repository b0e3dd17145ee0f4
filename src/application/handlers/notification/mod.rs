//! Email notification settings handlers.

mod get_settings;
mod send_test_notification;
mod update_settings;

pub use get_settings::GetNotificationSettingsHandler;
pub use send_test_notification::SendTestNotificationHandler;
pub use update_settings::{
    UpdateNotificationSettingsCommand, UpdateNotificationSettingsHandler,
};
