use async_trait::async_trait;
use rust_decimal::Decimal;

use super::RecipeSummary;
use crate::auth::application::domain::entities::UserId;
use crate::shared::PatchField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub owner: UserId,
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub tag_ids: Vec<i32>,
    pub ingredient_ids: Vec<i32>,
}

/// Field-by-field changes. `None` / `Unset` keeps the stored value; a
/// `Some` id list replaces the whole link set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Decimal>,
    pub link: PatchField<String>,
    pub tag_ids: Option<Vec<i32>>,
    pub ingredient_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Tag {0} does not exist")]
    UnknownTag(i32),

    #[error("Ingredient {0} does not exist")]
    UnknownIngredient(i32),
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Inserts the recipe and its links atomically.
    async fn create_recipe(&self, data: NewRecipe) -> Result<RecipeSummary, RecipeRepositoryError>;

    async fn update_recipe(
        &self,
        owner: UserId,
        recipe_id: i32,
        changes: RecipeChanges,
    ) -> Result<RecipeSummary, RecipeRepositoryError>;

    /// Returns the image key the deleted recipe pointed at.
    async fn delete_recipe(
        &self,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<Option<String>, RecipeRepositoryError>;

    /// Points the recipe at `image_key`, returning the previous key.
    async fn replace_image(
        &self,
        owner: UserId,
        recipe_id: i32,
        image_key: String,
    ) -> Result<Option<String>, RecipeRepositoryError>;
}
