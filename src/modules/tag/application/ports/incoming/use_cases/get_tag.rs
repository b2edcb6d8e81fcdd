use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, tag::application::ports::outgoing::TagRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTagError {
    #[error("Tag not found")]
    TagNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTagUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, tag_id: i32) -> Result<TagRecord, GetTagError>;
}
