use async_trait::async_trait;
use tracing::info;

use crate::ingredient::application::ports::{
    incoming::use_cases::{UpdateIngredientCommand, UpdateIngredientError, UpdateIngredientUseCase},
    outgoing::{IngredientRecord, IngredientRepository, IngredientRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateIngredientUseCase for UpdateIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateIngredientCommand,
    ) -> Result<IngredientRecord, UpdateIngredientError> {
        let ingredient = self
            .repository
            .update_ingredient(
                command.owner(),
                command.ingredient_id(),
                command.name().map(str::to_string),
            )
            .await
            .map_err(|e| match e {
                IngredientRepositoryError::IngredientNotFound => {
                    UpdateIngredientError::IngredientNotFound
                }
                other => UpdateIngredientError::RepositoryError(other.to_string()),
            })?;

        info!(ingredient_id = ingredient.id, "Ingredient updated");

        Ok(ingredient)
    }
}
