mod create_tag;
mod delete_tag;
mod dto;
mod get_tag;
mod list_tags;
mod update_tag;

pub use create_tag::create_tag_handler;
pub use delete_tag::delete_tag_handler;
pub use dto::{PatchTagRequest, TagRequest, TagResponse};
pub use get_tag::get_tag_handler;
pub use list_tags::{list_tags_handler, ListTagsParams};
pub use update_tag::{patch_tag_handler, put_tag_handler};

pub use create_tag::__path_create_tag_handler;
pub use delete_tag::__path_delete_tag_handler;
pub use get_tag::__path_get_tag_handler;
pub use list_tags::__path_list_tags_handler;
pub use update_tag::__path_patch_tag_handler;
pub use update_tag::__path_put_tag_handler;
