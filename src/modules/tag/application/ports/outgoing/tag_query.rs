use async_trait::async_trait;

use super::TagRecord;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagQuery: Send + Sync {
    /// Tags owned by `owner`, newest id first. With `assigned_only`, only
    /// tags linked to at least one recipe.
    async fn list(&self, owner: UserId, assigned_only: bool)
        -> Result<Vec<TagRecord>, TagQueryError>;

    async fn find(&self, owner: UserId, tag_id: i32) -> Result<Option<TagRecord>, TagQueryError>;
}
