use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::tag::application::ports::outgoing::{
    CreateTagData, TagRecord, TagRepository, TagRepositoryError,
};

use super::sea_orm_entity::tags::{
    ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity, Model as TagModel,
};

#[derive(Debug, Clone)]
pub struct TagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> TagRepositoryError {
    TagRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn create_tag(&self, data: CreateTagData) -> Result<TagRecord, TagRepositoryError> {
        let active = TagActiveModel {
            user_id: Set(data.owner.value()),
            name: Set(data.name),
            ..Default::default()
        };

        let inserted: TagModel = active.insert(&*self.db).await.map_err(db_err)?;

        Ok(inserted.to_record())
    }

    async fn update_tag(
        &self,
        owner: UserId,
        tag_id: i32,
        name: Option<String>,
    ) -> Result<TagRecord, TagRepositoryError> {
        let existing = TagEntity::find_by_id(tag_id)
            .filter(TagColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(TagRepositoryError::TagNotFound)?;

        let Some(name) = name else {
            return Ok(existing.to_record());
        };

        let mut active: TagActiveModel = existing.into();
        active.name = Set(name);

        let updated = active.update(&*self.db).await.map_err(db_err)?;

        Ok(updated.to_record())
    }

    async fn delete_tag(&self, owner: UserId, tag_id: i32) -> Result<(), TagRepositoryError> {
        let result = TagEntity::delete_many()
            .filter(TagColumn::Id.eq(tag_id))
            .filter(TagColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(TagRepositoryError::TagNotFound);
        }

        Ok(())
    }
}
