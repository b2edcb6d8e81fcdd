use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

use crate::auth::application::domain::entities::UserId;
use crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients;
use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;
use crate::recipe::application::domain::entities::RecipeFilter;
use crate::recipe::application::ports::outgoing::{
    NamedItem, RecipeDetail, RecipeQuery, RecipeQueryError, RecipeSummary,
};

use super::sea_orm_entity::{recipe_ingredients, recipe_tags, recipes};

#[derive(Debug, Clone)]
pub struct RecipeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> RecipeQueryError {
    RecipeQueryError::DatabaseError(e.to_string())
}

fn group<K>(pairs: impl Iterator<Item = (i32, K)>) -> HashMap<i32, Vec<K>> {
    let mut grouped: HashMap<i32, Vec<K>> = HashMap::new();
    for (recipe_id, value) in pairs {
        grouped.entry(recipe_id).or_default().push(value);
    }
    grouped
}

#[async_trait]
impl RecipeQuery for RecipeQueryPostgres {
    async fn list(
        &self,
        owner: UserId,
        filter: &RecipeFilter,
    ) -> Result<Vec<RecipeSummary>, RecipeQueryError> {
        let mut select = recipes::Entity::find().filter(recipes::Column::UserId.eq(owner.value()));

        // IN (subquery) keeps each recipe once however many links match
        if !filter.tag_ids.is_empty() {
            select = select.filter(
                recipes::Column::Id.in_subquery(
                    Query::select()
                        .column(recipe_tags::Column::RecipeId)
                        .from(recipe_tags::Entity)
                        .and_where(recipe_tags::Column::TagId.is_in(filter.tag_ids.clone()))
                        .to_owned(),
                ),
            );
        }

        if !filter.ingredient_ids.is_empty() {
            select = select.filter(
                recipes::Column::Id.in_subquery(
                    Query::select()
                        .column(recipe_ingredients::Column::RecipeId)
                        .from(recipe_ingredients::Entity)
                        .and_where(
                            recipe_ingredients::Column::IngredientId
                                .is_in(filter.ingredient_ids.clone()),
                        )
                        .to_owned(),
                ),
            );
        }

        let models = select
            .order_by_desc(recipes::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();

        let tag_links = recipe_tags::Entity::find()
            .filter(recipe_tags::Column::RecipeId.is_in(ids.clone()))
            .order_by_asc(recipe_tags::Column::TagId)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let ingredient_links = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.is_in(ids))
            .order_by_asc(recipe_ingredients::Column::IngredientId)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let mut tags = group(tag_links.into_iter().map(|l| (l.recipe_id, l.tag_id)));
        let mut ingredients = group(
            ingredient_links
                .into_iter()
                .map(|l| (l.recipe_id, l.ingredient_id)),
        );

        Ok(models
            .iter()
            .map(|m| {
                m.to_summary(
                    tags.remove(&m.id).unwrap_or_default(),
                    ingredients.remove(&m.id).unwrap_or_default(),
                )
            })
            .collect())
    }

    async fn find_detail(
        &self,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<Option<RecipeDetail>, RecipeQueryError> {
        let Some(model) = recipes::Entity::find_by_id(recipe_id)
            .filter(recipes::Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let tags = model
            .find_related(tags::Entity)
            .order_by_asc(tags::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|t| NamedItem {
                id: t.id,
                name: t.name,
            })
            .collect();

        let ingredients = model
            .find_related(ingredients::Entity)
            .order_by_asc(ingredients::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|i| NamedItem {
                id: i.id,
                name: i.name,
            })
            .collect();

        Ok(Some(model.to_detail(tags, ingredients)))
    }
}
