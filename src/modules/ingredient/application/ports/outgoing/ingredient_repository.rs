use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateIngredientData {
    pub owner: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IngredientRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Ingredient not found")]
    IngredientNotFound,
}

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn create_ingredient(
        &self,
        data: CreateIngredientData,
    ) -> Result<IngredientRecord, IngredientRepositoryError>;

    /// `None` leaves the name untouched and returns the stored row.
    async fn update_ingredient(
        &self,
        owner: UserId,
        ingredient_id: i32,
        name: Option<String>,
    ) -> Result<IngredientRecord, IngredientRepositoryError>;

    async fn delete_ingredient(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<(), IngredientRepositoryError>;
}
