use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::ports::{
        incoming::use_cases::{ListIngredientsError, ListIngredientsUseCase},
        outgoing::{IngredientQuery, IngredientRecord},
    },
};

#[derive(Debug, Clone)]
pub struct ListIngredientsService<Q>
where
    Q: IngredientQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListIngredientsService<Q>
where
    Q: IngredientQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListIngredientsUseCase for ListIngredientsService<Q>
where
    Q: IngredientQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<IngredientRecord>, ListIngredientsError> {
        self.query
            .list(owner, assigned_only)
            .await
            .map_err(|e| ListIngredientsError::QueryFailed(e.to_string()))
    }
}
