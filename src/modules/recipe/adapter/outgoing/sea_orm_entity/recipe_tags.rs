use sea_orm::entity::prelude::*;

use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;

use super::recipes;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipe_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
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
        belongs_to = "crate::modules::tag::adapter::outgoing::sea_orm_entity::tags::Entity",
        from = "Column::TagId",
        to = "crate::modules::tag::adapter::outgoing::sea_orm_entity::tags::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Tags,
}

impl Related<recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipes.def()
    }
}

impl Related<tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
