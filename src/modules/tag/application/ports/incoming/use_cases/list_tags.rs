use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, tag::application::ports::outgoing::TagRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTagsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTagsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<TagRecord>, ListTagsError>;
}
