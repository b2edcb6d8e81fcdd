pub mod create_recipe_service;
pub mod delete_recipe_service;
pub mod get_recipe_service;
pub mod list_recipes_service;
pub mod update_recipe_service;
pub mod upload_image_service;

#[cfg(test)]
pub(crate) mod in_memory;

pub use create_recipe_service::CreateRecipeService;
pub use delete_recipe_service::DeleteRecipeService;
pub use get_recipe_service::GetRecipeService;
pub use list_recipes_service::ListRecipesService;
pub use update_recipe_service::UpdateRecipeService;
pub use upload_image_service::UploadImageService;
