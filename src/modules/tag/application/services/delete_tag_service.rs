use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    tag::application::ports::{
        incoming::use_cases::{DeleteTagError, DeleteTagUseCase},
        outgoing::{TagRepository, TagRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTagUseCase for DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, tag_id: i32) -> Result<(), DeleteTagError> {
        self.repository
            .delete_tag(owner, tag_id)
            .await
            .map_err(|e| match e {
                TagRepositoryError::TagNotFound => DeleteTagError::TagNotFound,
                other => DeleteTagError::RepositoryError(other.to_string()),
            })?;

        info!(tag_id, owner = %owner, "Tag deleted");

        Ok(())
    }
}
