mod create_ingredient;
mod delete_ingredient;
mod get_ingredient;
mod list_ingredients;
mod update_ingredient;

pub use create_ingredient::{
    CreateIngredientCommand, CreateIngredientError, CreateIngredientUseCase,
};
pub use delete_ingredient::{DeleteIngredientError, DeleteIngredientUseCase};
pub use get_ingredient::{GetIngredientError, GetIngredientUseCase};
pub use list_ingredients::{ListIngredientsError, ListIngredientsUseCase};
pub use update_ingredient::{
    UpdateIngredientCommand, UpdateIngredientError, UpdateIngredientUseCase,
};
