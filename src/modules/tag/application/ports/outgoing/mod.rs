mod tag_query;
mod tag_repository;

pub use tag_query::{TagQuery, TagQueryError};
pub use tag_repository::{CreateTagData, TagRecord, TagRepository, TagRepositoryError};
