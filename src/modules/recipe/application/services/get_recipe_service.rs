use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    recipe::application::ports::{
        incoming::use_cases::{GetRecipeError, GetRecipeUseCase},
        outgoing::{ImageStorage, RecipeDetail, RecipeQuery},
    },
};

#[derive(Clone)]
pub struct GetRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    query: Q,
    storage: Arc<dyn ImageStorage + Send + Sync>,
}

impl<Q> GetRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    pub fn new(query: Q, storage: Arc<dyn ImageStorage + Send + Sync>) -> Self {
        Self { query, storage }
    }
}

#[async_trait]
impl<Q> GetRecipeUseCase for GetRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, recipe_id: i32) -> Result<RecipeDetail, GetRecipeError> {
        let mut detail = self
            .query
            .find_detail(owner, recipe_id)
            .await
            .map_err(|e| GetRecipeError::QueryFailed(e.to_string()))?
            .ok_or(GetRecipeError::RecipeNotFound)?;

        detail.image = detail.image.map(|key| self.storage.public_url(&key));

        Ok(detail)
    }
}
