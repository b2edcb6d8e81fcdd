use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::RecipeDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecipeError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetRecipeUseCase: Send + Sync {
    /// The returned detail carries a public image URL, not the storage key.
    async fn execute(&self, owner: UserId, recipe_id: i32) -> Result<RecipeDetail, GetRecipeError>;
}
