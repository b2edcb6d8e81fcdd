mod create_ingredient;
mod delete_ingredient;
mod dto;
mod get_ingredient;
mod list_ingredients;
mod update_ingredient;

pub use create_ingredient::create_ingredient_handler;
pub use delete_ingredient::delete_ingredient_handler;
pub use dto::{PatchIngredientRequest, IngredientRequest, IngredientResponse};
pub use get_ingredient::get_ingredient_handler;
pub use list_ingredients::{list_ingredients_handler, ListIngredientsParams};
pub use update_ingredient::{patch_ingredient_handler, put_ingredient_handler};

pub use create_ingredient::__path_create_ingredient_handler;
pub use delete_ingredient::__path_delete_ingredient_handler;
pub use get_ingredient::__path_get_ingredient_handler;
pub use list_ingredients::__path_list_ingredients_handler;
pub use update_ingredient::__path_patch_ingredient_handler;
pub use update_ingredient::__path_put_ingredient_handler;
