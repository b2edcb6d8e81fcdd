mod create_recipe;
mod delete_recipe;
mod get_recipe;
mod list_recipes;
mod recipe_fields;
mod update_recipe;
mod upload_image;

pub use create_recipe::{CreateRecipeCommand, CreateRecipeError, CreateRecipeUseCase};
pub use delete_recipe::{DeleteRecipeError, DeleteRecipeUseCase};
pub use get_recipe::{GetRecipeError, GetRecipeUseCase};
pub use list_recipes::{ListRecipesError, ListRecipesUseCase};
pub use recipe_fields::{RecipeFieldError, RecipeFields, RecipePatch};
pub use update_recipe::{UpdateRecipeCommand, UpdateRecipeError, UpdateRecipeUseCase};
pub use upload_image::{RecipeImageView, UploadImageCommand, UploadImageError, UploadImageUseCase};
