use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    tag::application::ports::{
        incoming::use_cases::{GetTagError, GetTagUseCase},
        outgoing::{TagQuery, TagRecord},
    },
};

#[derive(Debug, Clone)]
pub struct GetTagService<Q>
where
    Q: TagQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTagService<Q>
where
    Q: TagQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTagUseCase for GetTagService<Q>
where
    Q: TagQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, tag_id: i32) -> Result<TagRecord, GetTagError> {
        self.query
            .find(owner, tag_id)
            .await
            .map_err(|e| GetTagError::QueryFailed(e.to_string()))?
            .ok_or(GetTagError::TagNotFound)
    }
}
