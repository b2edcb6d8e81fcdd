use async_trait::async_trait;
use tracing::info;

use crate::tag::application::ports::{
    incoming::use_cases::{UpdateTagCommand, UpdateTagError, UpdateTagUseCase},
    outgoing::{TagRecord, TagRepository, TagRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTagUseCase for UpdateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTagCommand) -> Result<TagRecord, UpdateTagError> {
        let tag = self
            .repository
            .update_tag(
                command.owner(),
                command.tag_id(),
                command.name().map(str::to_string),
            )
            .await
            .map_err(|e| match e {
                TagRepositoryError::TagNotFound => UpdateTagError::TagNotFound,
                other => UpdateTagError::RepositoryError(other.to_string()),
            })?;

        info!(tag_id = tag.id, "Tag updated");

        Ok(tag)
    }
}
