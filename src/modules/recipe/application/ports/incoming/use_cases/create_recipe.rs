use async_trait::async_trait;

use super::recipe_fields::{self, RecipeFieldError, RecipeFields};
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::{NewRecipe, RecipeSummary};

//
// ──────────────────────────────────────────────────────────
// Create Recipe Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateRecipeCommand {
    recipe: NewRecipe,
}

impl CreateRecipeCommand {
    pub fn new(owner: UserId, fields: RecipeFields) -> Result<Self, RecipeFieldError> {
        Ok(Self {
            recipe: NewRecipe {
                owner,
                title: recipe_fields::title(&fields.title)?,
                time_minutes: recipe_fields::time_minutes(fields.time_minutes)?,
                price: recipe_fields::price(fields.price)?,
                link: recipe_fields::link(fields.link)?,
                tag_ids: recipe_fields::ids(fields.tags),
                ingredient_ids: recipe_fields::ids(fields.ingredients),
            },
        })
    }

    pub fn owner(&self) -> UserId {
        self.recipe.owner
    }

    pub fn recipe(&self) -> &NewRecipe {
        &self.recipe
    }

    pub fn into_recipe(self) -> NewRecipe {
        self.recipe
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRecipeError {
    #[error("Tag {0} does not exist")]
    UnknownTag(i32),

    #[error("Ingredient {0} does not exist")]
    UnknownIngredient(i32),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, command: CreateRecipeCommand)
        -> Result<RecipeSummary, CreateRecipeError>;
}
