mod image_storage;
mod recipe_query;
mod recipe_repository;

pub use image_storage::{ImageStorage, ImageStorageError};
#[cfg(test)]
pub use image_storage::MockImageStorage;
pub use recipe_query::{NamedItem, RecipeDetail, RecipeQuery, RecipeQueryError, RecipeSummary};
pub use recipe_repository::{NewRecipe, RecipeChanges, RecipeRepository, RecipeRepositoryError};
