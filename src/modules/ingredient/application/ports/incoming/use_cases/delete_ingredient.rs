use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteIngredientError {
    #[error("Ingredient not found")]
    IngredientNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteIngredientUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, ingredient_id: i32) -> Result<(), DeleteIngredientError>;
}
