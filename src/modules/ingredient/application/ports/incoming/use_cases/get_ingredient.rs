use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::ports::outgoing::IngredientRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetIngredientError {
    #[error("Ingredient not found")]
    IngredientNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetIngredientUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<IngredientRecord, GetIngredientError>;
}
