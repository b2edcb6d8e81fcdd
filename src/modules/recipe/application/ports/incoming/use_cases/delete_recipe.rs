use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteRecipeError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, recipe_id: i32) -> Result<(), DeleteRecipeError>;
}
