pub mod create_ingredient_service;
pub mod delete_ingredient_service;
pub mod get_ingredient_service;
pub mod list_ingredients_service;
pub mod update_ingredient_service;

#[cfg(test)]
pub(crate) mod in_memory;

pub use create_ingredient_service::CreateIngredientService;
pub use delete_ingredient_service::DeleteIngredientService;
pub use get_ingredient_service::GetIngredientService;
pub use list_ingredients_service::ListIngredientsService;
pub use update_ingredient_service::UpdateIngredientService;
