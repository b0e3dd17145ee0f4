//! Document tag handlers.

mod create_tag;
mod delete_tag;
mod list_tags;
mod update_tag;

pub use create_tag::{CreateTagCommand, CreateTagHandler};
pub use delete_tag::{DeleteTagCommand, DeleteTagHandler};
pub use list_tags::ListTagsHandler;
pub use update_tag::{UpdateTagCommand, UpdateTagHandler};
