use async_trait::async_trait;
use tracing::info;

use crate::recipe::application::ports::{
    incoming::use_cases::{UpdateRecipeCommand, UpdateRecipeError, UpdateRecipeUseCase},
    outgoing::{RecipeRepository, RecipeRepositoryError, RecipeSummary},
};

#[derive(Debug, Clone)]
pub struct UpdateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateRecipeUseCase for UpdateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateRecipeCommand,
    ) -> Result<RecipeSummary, UpdateRecipeError> {
        let owner = command.owner();
        let recipe_id = command.recipe_id();

        let recipe = self
            .repository
            .update_recipe(owner, recipe_id, command.into_changes())
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::RecipeNotFound => UpdateRecipeError::RecipeNotFound,
                RecipeRepositoryError::UnknownTag(id) => UpdateRecipeError::UnknownTag(id),
                RecipeRepositoryError::UnknownIngredient(id) => {
                    UpdateRecipeError::UnknownIngredient(id)
                }
                other => UpdateRecipeError::RepositoryError(other.to_string()),
            })?;

        info!(recipe_id, owner = %owner, "Recipe updated");

        Ok(recipe)
    }
}
