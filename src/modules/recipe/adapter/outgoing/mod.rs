pub mod local_image_storage;
pub mod recipe_query_postgres;
pub mod recipe_repository_postgres;
pub mod sea_orm_entity;

pub use local_image_storage::LocalImageStorage;
pub use recipe_query_postgres::RecipeQueryPostgres;
pub use recipe_repository_postgres::RecipeRepositoryPostgres;
