use async_trait::async_trait;
use tracing::info;

use crate::tag::application::ports::{
    incoming::use_cases::{CreateTagCommand, CreateTagError, CreateTagUseCase},
    outgoing::{CreateTagData, TagRecord, TagRepository},
};

#[derive(Debug, Clone)]
pub struct CreateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTagUseCase for CreateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTagCommand) -> Result<TagRecord, CreateTagError> {
        let data = CreateTagData {
            owner: command.owner(),
            name: command.name().to_string(),
        };

        let tag = self
            .repository
            .create_tag(data)
            .await
            .map_err(|e| CreateTagError::RepositoryError(e.to_string()))?;

        info!(tag_id = tag.id, owner = %command.owner(), "Tag created");

        Ok(tag)
    }
}
