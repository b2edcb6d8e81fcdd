use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipe_tags;
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagQueryError, TagRecord};

use super::sea_orm_entity::tags::{Column as TagColumn, Entity as TagEntity, Model as TagModel};

#[derive(Debug, Clone)]
pub struct TagQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagQuery for TagQueryPostgres {
    async fn list(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<TagRecord>, TagQueryError> {
        let mut select = TagEntity::find().filter(TagColumn::UserId.eq(owner.value()));

        if assigned_only {
            select = select.filter(
                TagColumn::Id.in_subquery(
                    Query::select()
                        .column(recipe_tags::Column::TagId)
                        .from(recipe_tags::Entity)
                        .to_owned(),
                ),
            );
        }

        let models: Vec<TagModel> = select
            .order_by_desc(TagColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| TagQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TagModel::to_record).collect())
    }

    async fn find(&self, owner: UserId, tag_id: i32) -> Result<Option<TagRecord>, TagQueryError> {
        let model = TagEntity::find_by_id(tag_id)
            .filter(TagColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(|e| TagQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(TagModel::to_record))
    }
}
