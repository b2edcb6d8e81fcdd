use async_trait::async_trait;
use tracing::info;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::ports::{
        incoming::use_cases::{DeleteIngredientError, DeleteIngredientUseCase},
        outgoing::{IngredientRepository, IngredientRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteIngredientUseCase for DeleteIngredientService<R>
where
    R: IngredientRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<(), DeleteIngredientError> {
        self.repository
            .delete_ingredient(owner, ingredient_id)
            .await
            .map_err(|e| match e {
                IngredientRepositoryError::IngredientNotFound => {
                    DeleteIngredientError::IngredientNotFound
                }
                other => DeleteIngredientError::RepositoryError(other.to_string()),
            })?;

        info!(ingredient_id, owner = %owner, "Ingredient deleted");

        Ok(())
    }
}
