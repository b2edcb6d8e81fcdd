use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    recipe::application::{
        domain::entities::RecipeFilter,
        ports::{
            incoming::use_cases::{ListRecipesError, ListRecipesUseCase},
            outgoing::{RecipeQuery, RecipeSummary},
        },
    },
};

#[derive(Debug, Clone)]
pub struct ListRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListRecipesUseCase for ListRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        filter: RecipeFilter,
    ) -> Result<Vec<RecipeSummary>, ListRecipesError> {
        self.query
            .list(owner, &filter)
            .await
            .map_err(|e| ListRecipesError::QueryFailed(e.to_string()))
    }
}
