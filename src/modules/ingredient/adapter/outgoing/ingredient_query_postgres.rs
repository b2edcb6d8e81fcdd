use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipe_ingredients;
use crate::modules::ingredient::application::ports::outgoing::{
    IngredientQuery, IngredientQueryError, IngredientRecord,
};

use super::sea_orm_entity::ingredients::{
    Column as IngredientColumn, Entity as IngredientEntity, Model as IngredientModel,
};

#[derive(Debug, Clone)]
pub struct IngredientQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IngredientQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientQuery for IngredientQueryPostgres {
    async fn list(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<IngredientRecord>, IngredientQueryError> {
        let mut select =
            IngredientEntity::find().filter(IngredientColumn::UserId.eq(owner.value()));

        if assigned_only {
            select = select.filter(
                IngredientColumn::Id.in_subquery(
                    Query::select()
                        .column(recipe_ingredients::Column::IngredientId)
                        .from(recipe_ingredients::Entity)
                        .to_owned(),
                ),
            );
        }

        let models: Vec<IngredientModel> = select
            .order_by_desc(IngredientColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| IngredientQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(IngredientModel::to_record).collect())
    }

    async fn find(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<Option<IngredientRecord>, IngredientQueryError> {
        let model = IngredientEntity::find_by_id(ingredient_id)
            .filter(IngredientColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| IngredientQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(IngredientModel::to_record))
    }
}
