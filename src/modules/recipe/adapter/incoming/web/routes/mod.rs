mod create_recipe;
mod delete_recipe;
mod dto;
mod get_recipe;
mod list_recipes;
mod update_recipe;
mod upload_image;

pub use create_recipe::create_recipe_handler;
pub use delete_recipe::delete_recipe_handler;
pub use dto::{
    NamedItemResponse, PatchRecipeRequest, RecipeDetailResponse, RecipeImageResponse,
    RecipeRequest, RecipeResponse, UploadImageForm,
};
pub use get_recipe::get_recipe_handler;
pub use list_recipes::{list_recipes_handler, ListRecipesParams};
pub use update_recipe::{patch_recipe_handler, put_recipe_handler};
pub use upload_image::upload_image_handler;

pub use create_recipe::__path_create_recipe_handler;
pub use delete_recipe::__path_delete_recipe_handler;
pub use get_recipe::__path_get_recipe_handler;
pub use list_recipes::__path_list_recipes_handler;
pub use update_recipe::__path_patch_recipe_handler;
pub use update_recipe::__path_put_recipe_handler;
pub use upload_image::__path_upload_image_handler;
