mod ingredient_query;
mod ingredient_repository;

pub use ingredient_query::{IngredientQuery, IngredientQueryError};
pub use ingredient_repository::{
    CreateIngredientData, IngredientRecord, IngredientRepository, IngredientRepositoryError,
};
