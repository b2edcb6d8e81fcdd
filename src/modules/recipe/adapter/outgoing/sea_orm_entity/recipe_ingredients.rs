use sea_orm::entity::prelude::*;

use crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients;

use super::recipes;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipe_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipes::Entity",
        from = "Column::RecipeId",
        to = "super::recipes::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Recipes,

    #[sea_orm(
        belongs_to = "crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients::Entity",
        from = "Column::IngredientId",
        to = "crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Ingredients,
}

impl Related<recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipes.def()
    }
}

impl Related<ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
