pub mod create_tag_service;
pub mod delete_tag_service;
pub mod get_tag_service;
pub mod list_tags_service;
pub mod update_tag_service;

#[cfg(test)]
pub(crate) mod in_memory;

pub use create_tag_service::CreateTagService;
pub use delete_tag_service::DeleteTagService;
pub use get_tag_service::GetTagService;
pub use list_tags_service::ListTagsService;
pub use update_tag_service::UpdateTagService;
