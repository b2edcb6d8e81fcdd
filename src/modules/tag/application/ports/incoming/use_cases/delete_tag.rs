use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTagError {
    #[error("Tag not found")]
    TagNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTagUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, tag_id: i32) -> Result<(), DeleteTagError>;
}
