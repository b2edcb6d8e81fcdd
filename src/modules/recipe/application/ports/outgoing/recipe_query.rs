use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeFilter;

/// List shape: related records by id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub tags: Vec<i32>,
    pub ingredients: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedItem {
    pub id: i32,
    pub name: String,
}

/// Detail shape: related records expanded, plus the image key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<NamedItem>,
    pub ingredients: Vec<NamedItem>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// Owner's recipes matching `filter`, newest id first, each at most once.
    async fn list(
        &self,
        owner: UserId,
        filter: &RecipeFilter,
    ) -> Result<Vec<RecipeSummary>, RecipeQueryError>;

    async fn find_detail(
        &self,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<Option<RecipeDetail>, RecipeQueryError>;
}
