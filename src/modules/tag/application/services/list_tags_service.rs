use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    tag::application::ports::{
        incoming::use_cases::{ListTagsError, ListTagsUseCase},
        outgoing::{TagQuery, TagRecord},
    },
};

#[derive(Debug, Clone)]
pub struct ListTagsService<Q>
where
    Q: TagQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTagsService<Q>
where
    Q: TagQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTagsUseCase for ListTagsService<Q>
where
    Q: TagQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<TagRecord>, ListTagsError> {
        self.query
            .list(owner, assigned_only)
            .await
            .map_err(|e| ListTagsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::application::services::in_memory::InMemoryTags;
    use uuid::Uuid;

    #[tokio::test]
    async fn lists_only_own_tags_newest_first() {
        // Arrange
        let me = UserId::from(Uuid::new_v4());
        let other = UserId::from(Uuid::new_v4());
        let store = InMemoryTags::default();
        store.seed(me, "Vegan", false);
        store.seed(other, "Fruity", false);
        store.seed(me, "Dessert", false);

        // Act
        let tags = ListTagsService::new(store).execute(me, false).await.unwrap();

        // Assert
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Dessert", "Vegan"]);
    }

    #[tokio::test]
    async fn assigned_only_skips_unused_tags() {
        let me = UserId::from(Uuid::new_v4());
        let store = InMemoryTags::default();
        store.seed(me, "Breakfast", true);
        store.seed(me, "Lunch", false);

        let tags = ListTagsService::new(store).execute(me, true).await.unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Breakfast");
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let result = ListTagsService::new(InMemoryTags::broken())
            .execute(UserId::from(Uuid::new_v4()), false)
            .await;

        assert!(matches!(result, Err(ListTagsError::QueryFailed(_))));
    }
}
