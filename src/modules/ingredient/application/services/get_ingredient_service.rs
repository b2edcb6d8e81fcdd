use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::ports::{
        incoming::use_cases::{GetIngredientError, GetIngredientUseCase},
        outgoing::{IngredientQuery, IngredientRecord},
    },
};

#[derive(Debug, Clone)]
pub struct GetIngredientService<Q>
where
    Q: IngredientQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetIngredientService<Q>
where
    Q: IngredientQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetIngredientUseCase for GetIngredientService<Q>
where
    Q: IngredientQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<IngredientRecord, GetIngredientError> {
        self.query
            .find(owner, ingredient_id)
            .await
            .map_err(|e| GetIngredientError::QueryFailed(e.to_string()))?
            .ok_or(GetIngredientError::IngredientNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::application::services::in_memory::InMemoryIngredients;
    use uuid::Uuid;

    #[tokio::test]
    async fn own_ingredient_is_found() {
        let me = UserId::from(Uuid::new_v4());
        let store = InMemoryIngredients::default();
        let id = store.seed(me, "Kale", false);

        let ingredient = GetIngredientService::new(store).execute(me, id).await.unwrap();

        assert_eq!(ingredient.name, "Kale");
    }

    #[tokio::test]
    async fn foreign_ingredient_is_not_found() {
        let store = InMemoryIngredients::default();
        let id = store.seed(UserId::from(Uuid::new_v4()), "Kale", false);

        let result = GetIngredientService::new(store)
            .execute(UserId::from(Uuid::new_v4()), id)
            .await;

        assert!(matches!(result, Err(GetIngredientError::IngredientNotFound)));
    }
}
