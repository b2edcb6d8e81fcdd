use sea_orm::entity::prelude::*;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients;
use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;

use super::{recipe_ingredients, recipe_tags};
use crate::recipe::application::ports::outgoing::{NamedItem, RecipeDetail, RecipeSummary};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,

    pub time_minutes: i32,

    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub price: Decimal,

    #[sea_orm(nullable)]
    pub link: Option<String>,

    /// Storage key of the current image, not a URL.
    #[sea_orm(nullable)]
    pub image: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_summary(&self, tags: Vec<i32>, ingredients: Vec<i32>) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            time_minutes: self.time_minutes,
            price: self.price,
            link: self.link.clone(),
            tags,
            ingredients,
        }
    }

    pub fn to_detail(&self, tags: Vec<NamedItem>, ingredients: Vec<NamedItem>) -> RecipeDetail {
        RecipeDetail {
            id: self.id,
            title: self.title.clone(),
            time_minutes: self.time_minutes,
            price: self.price,
            link: self.link.clone(),
            image: self.image.clone(),
            tags,
            ingredients,
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
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(has_many = "super::recipe_tags::Entity")]
    RecipeTags,

    #[sea_orm(has_many = "super::recipe_ingredients::Entity")]
    RecipeIngredients,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<recipe_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeTags.def()
    }
}

impl Related<recipe_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredients.def()
    }
}

// Many-to-many: recipes <-> tags via recipe_tags
impl Related<tags::Entity> for Entity {
    fn to() -> RelationDef {
        recipe_tags::Relation::Tags.def()
    }

    fn via() -> Option<RelationDef> {
        Some(recipe_tags::Relation::Recipes.def().rev())
    }
}

// Many-to-many: recipes <-> ingredients via recipe_ingredients
impl Related<ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        recipe_ingredients::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(recipe_ingredients::Relation::Recipes.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
