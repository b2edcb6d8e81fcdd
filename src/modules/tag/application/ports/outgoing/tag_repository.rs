use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateTagData {
    pub owner: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Tag not found")]
    TagNotFound,
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create_tag(&self, data: CreateTagData) -> Result<TagRecord, TagRepositoryError>;

    /// `None` leaves the name untouched and returns the stored row.
    async fn update_tag(
        &self,
        owner: UserId,
        tag_id: i32,
        name: Option<String>,
    ) -> Result<TagRecord, TagRepositoryError>;

    async fn delete_tag(&self, owner: UserId, tag_id: i32) -> Result<(), TagRepositoryError>;
}
