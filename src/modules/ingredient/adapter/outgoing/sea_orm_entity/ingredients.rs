use sea_orm::entity::prelude::*;

use crate::ingredient::application::ports::outgoing::IngredientRecord;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipe_ingredients;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Cleared when the owner is deleted; the row itself stays.
    pub user_id: Option<Uuid>,

    pub name: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> IngredientRecord {
        IngredientRecord {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Users,

    #[sea_orm(
        has_many = "crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipe_ingredients::Entity"
    )]
    RecipeIngredients,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<recipe_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
