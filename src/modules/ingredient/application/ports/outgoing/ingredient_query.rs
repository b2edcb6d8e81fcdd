use async_trait::async_trait;

use super::IngredientRecord;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum IngredientQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IngredientQuery: Send + Sync {
    /// Ingredients owned by `owner`, newest id first. With `assigned_only`, only
    /// ingredients linked to at least one recipe.
    async fn list(&self, owner: UserId, assigned_only: bool)
        -> Result<Vec<IngredientRecord>, IngredientQueryError>;

    async fn find(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<Option<IngredientRecord>, IngredientQueryError>;
}
