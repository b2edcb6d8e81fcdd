use async_trait::async_trait;
use tracing::info;

use crate::ingredient::application::ports::{
    incoming::use_cases::{CreateIngredientCommand, CreateIngredientError, CreateIngredientUseCase},
    outgoing::{CreateIngredientData, IngredientRecord, IngredientRepository},
};

#[derive(Debug, Clone)]
pub struct CreateIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateIngredientUseCase for CreateIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateIngredientCommand,
    ) -> Result<IngredientRecord, CreateIngredientError> {
        let data = CreateIngredientData {
            owner: command.owner(),
            name: command.name().to_string(),
        };

        let ingredient = self
            .repository
            .create_ingredient(data)
            .await
            .map_err(|e| CreateIngredientError::RepositoryError(e.to_string()))?;

        info!(ingredient_id = ingredient.id, owner = %command.owner(), "Ingredient created");

        Ok(ingredient)
    }
}
