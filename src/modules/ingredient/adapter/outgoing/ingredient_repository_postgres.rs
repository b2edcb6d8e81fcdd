use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::ingredient::application::ports::outgoing::{
    CreateIngredientData, IngredientRecord, IngredientRepository, IngredientRepositoryError,
};

use super::sea_orm_entity::ingredients::{
    ActiveModel as IngredientActiveModel, Column as IngredientColumn, Entity as IngredientEntity,
    Model as IngredientModel,
};

#[derive(Debug, Clone)]
pub struct IngredientRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IngredientRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> IngredientRepositoryError {
    IngredientRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn create_ingredient(
        &self,
        data: CreateIngredientData,
    ) -> Result<IngredientRecord, IngredientRepositoryError> {
        let active = IngredientActiveModel {
            user_id: Set(Some(data.owner.value())),
            name: Set(data.name),
            ..Default::default()
        };

        let inserted: IngredientModel = active.insert(&*self.db).await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update_ingredient(
        &self,
        owner: UserId,
        ingredient_id: i32,
        name: Option<String>,
    ) -> Result<IngredientRecord, IngredientRepositoryError> {
        let existing = IngredientEntity::find_by_id(ingredient_id)
            .filter(IngredientColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(IngredientRepositoryError::IngredientNotFound)?;

        let Some(name) = name else {
            return Ok(existing.to_record());
        };

        let mut active: IngredientActiveModel = existing.into();
        active.name = Set(name);

        let updated = active.update(&*self.db).await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete_ingredient(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<(), IngredientRepositoryError> {
        let result = IngredientEntity::delete_many()
            .filter(IngredientColumn::Id.eq(ingredient_id))
            .filter(IngredientColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(IngredientRepositoryError::IngredientNotFound);
        }

        Ok(())
    }
}
