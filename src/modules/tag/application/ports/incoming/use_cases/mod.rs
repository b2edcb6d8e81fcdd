mod create_tag;
mod delete_tag;
mod get_tag;
mod list_tags;
mod update_tag;

pub use create_tag::{CreateTagCommand, CreateTagError, CreateTagUseCase};
pub use delete_tag::{DeleteTagError, DeleteTagUseCase};
pub use get_tag::{GetTagError, GetTagUseCase};
pub use list_tags::{ListTagsError, ListTagsUseCase};
pub use update_tag::{UpdateTagCommand, UpdateTagError, UpdateTagUseCase};
