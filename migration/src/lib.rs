pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20260301_090000_create_table_tags;
mod m20260301_090100_create_table_ingredients;
mod m20260301_090200_create_table_recipes;
mod m20260301_090300_create_table_recipe_links;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20260301_090000_create_table_tags::Migration),
            Box::new(m20260301_090100_create_table_ingredients::Migration),
            Box::new(m20260301_090200_create_table_recipes::Migration),
            Box::new(m20260301_090300_create_table_recipe_links::Migration),
        ]
    }
}
