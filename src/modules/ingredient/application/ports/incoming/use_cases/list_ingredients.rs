use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::ports::outgoing::IngredientRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListIngredientsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<IngredientRecord>, ListIngredientsError>;
}
