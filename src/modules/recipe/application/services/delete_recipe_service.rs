use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    auth::application::domain::entities::UserId,
    recipe::application::ports::{
        incoming::use_cases::{DeleteRecipeError, DeleteRecipeUseCase},
        outgoing::{ImageStorage, RecipeRepository, RecipeRepositoryError},
    },
};

#[derive(Clone)]
pub struct DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    repository: R,
    storage: Arc<dyn ImageStorage + Send + Sync>,
}

impl<R> DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    pub fn new(repository: R, storage: Arc<dyn ImageStorage + Send + Sync>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> DeleteRecipeUseCase for DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, recipe_id: i32) -> Result<(), DeleteRecipeError> {
        let image = self
            .repository
            .delete_recipe(owner, recipe_id)
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::RecipeNotFound => DeleteRecipeError::RecipeNotFound,
                other => DeleteRecipeError::RepositoryError(other.to_string()),
            })?;

        // The row is gone either way; a leftover file only costs disk space
        if let Some(key) = image {
            if let Err(e) = self.storage.remove(key.clone()).await {
                warn!(recipe_id, key = %key, error = %e, "Failed to remove recipe image");
            }
        }

        info!(recipe_id, owner = %owner, "Recipe deleted");

        Ok(())
    }
}
