use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeFilter;
use crate::recipe::application::ports::outgoing::RecipeSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListRecipesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        filter: RecipeFilter,
    ) -> Result<Vec<RecipeSummary>, ListRecipesError>;
}
