use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::auth::application::domain::entities::UserId;
use crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients;
use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;
use crate::recipe::application::ports::outgoing::{
    NewRecipe, RecipeChanges, RecipeRepository, RecipeRepositoryError, RecipeSummary,
};
use crate::shared::PatchField;

use super::sea_orm_entity::{recipe_ingredients, recipe_tags, recipes};

#[derive(Debug, Clone)]
pub struct RecipeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_owned<C>(
        conn: &C,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<recipes::Model, RecipeRepositoryError>
    where
        C: sea_orm::ConnectionTrait,
    {
        recipes::Entity::find_by_id(recipe_id)
            .filter(recipes::Column::UserId.eq(owner.value()))
            .one(conn)
            .await
            .map_err(db_err)?
            .ok_or(RecipeRepositoryError::RecipeNotFound)
    }

    /// Any tag id may be linked as long as the row exists.
    async fn ensure_tags_exist(
        txn: &DatabaseTransaction,
        ids: &[i32],
    ) -> Result<(), RecipeRepositoryError> {
        if ids.is_empty() {
            return Ok(());
        }

        let found: Vec<i32> = tags::Entity::find()
            .filter(tags::Column::Id.is_in(ids.to_vec()))
            .all(txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|t| t.id)
            .collect();

        match ids.iter().find(|id| !found.contains(id)) {
            Some(missing) => Err(RecipeRepositoryError::UnknownTag(*missing)),
            None => Ok(()),
        }
    }

    async fn ensure_ingredients_exist(
        txn: &DatabaseTransaction,
        ids: &[i32],
    ) -> Result<(), RecipeRepositoryError> {
        if ids.is_empty() {
            return Ok(());
        }

        let found: Vec<i32> = ingredients::Entity::find()
            .filter(ingredients::Column::Id.is_in(ids.to_vec()))
            .all(txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|i| i.id)
            .collect();

        match ids.iter().find(|id| !found.contains(id)) {
            Some(missing) => Err(RecipeRepositoryError::UnknownIngredient(*missing)),
            None => Ok(()),
        }
    }

    async fn link_tags(
        txn: &DatabaseTransaction,
        recipe_id: i32,
        ids: &[i32],
    ) -> Result<(), RecipeRepositoryError> {
        if ids.is_empty() {
            return Ok(());
        }

        let rows = ids.iter().map(|tag_id| recipe_tags::ActiveModel {
            recipe_id: Set(recipe_id),
            tag_id: Set(*tag_id),
        });

        recipe_tags::Entity::insert_many(rows)
            .exec_without_returning(txn)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn link_ingredients(
        txn: &DatabaseTransaction,
        recipe_id: i32,
        ids: &[i32],
    ) -> Result<(), RecipeRepositoryError> {
        if ids.is_empty() {
            return Ok(());
        }

        let rows = ids
            .iter()
            .map(|ingredient_id| recipe_ingredients::ActiveModel {
                recipe_id: Set(recipe_id),
                ingredient_id: Set(*ingredient_id),
            });

        recipe_ingredients::Entity::insert_many(rows)
            .exec_without_returning(txn)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn replace_tag_links(
        txn: &DatabaseTransaction,
        recipe_id: i32,
        ids: &[i32],
    ) -> Result<(), RecipeRepositoryError> {
        recipe_tags::Entity::delete_many()
            .filter(recipe_tags::Column::RecipeId.eq(recipe_id))
            .exec(txn)
            .await
            .map_err(db_err)?;

        Self::link_tags(txn, recipe_id, ids).await
    }

    async fn replace_ingredient_links(
        txn: &DatabaseTransaction,
        recipe_id: i32,
        ids: &[i32],
    ) -> Result<(), RecipeRepositoryError> {
        recipe_ingredients::Entity::delete_many()
            .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
            .exec(txn)
            .await
            .map_err(db_err)?;

        Self::link_ingredients(txn, recipe_id, ids).await
    }

    async fn linked_tag_ids(
        txn: &DatabaseTransaction,
        recipe_id: i32,
    ) -> Result<Vec<i32>, RecipeRepositoryError> {
        Ok(recipe_tags::Entity::find()
            .filter(recipe_tags::Column::RecipeId.eq(recipe_id))
            .order_by_asc(recipe_tags::Column::TagId)
            .all(txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|l| l.tag_id)
            .collect())
    }

    async fn linked_ingredient_ids(
        txn: &DatabaseTransaction,
        recipe_id: i32,
    ) -> Result<Vec<i32>, RecipeRepositoryError> {
        Ok(recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.eq(recipe_id))
            .order_by_asc(recipe_ingredients::Column::IngredientId)
            .all(txn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|l| l.ingredient_id)
            .collect())
    }

    async fn create_in(
        txn: &DatabaseTransaction,
        data: NewRecipe,
    ) -> Result<RecipeSummary, RecipeRepositoryError> {
        Self::ensure_tags_exist(txn, &data.tag_ids).await?;
        Self::ensure_ingredients_exist(txn, &data.ingredient_ids).await?;

        let active = recipes::ActiveModel {
            user_id: Set(data.owner.value()),
            title: Set(data.title),
            time_minutes: Set(data.time_minutes),
            price: Set(data.price),
            link: Set(data.link),
            image: Set(None),
            ..Default::default()
        };

        let model = active.insert(txn).await.map_err(db_err)?;

        Self::link_tags(txn, model.id, &data.tag_ids).await?;
        Self::link_ingredients(txn, model.id, &data.ingredient_ids).await?;

        Ok(model.to_summary(sorted(data.tag_ids), sorted(data.ingredient_ids)))
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        owner: UserId,
        recipe_id: i32,
        changes: RecipeChanges,
    ) -> Result<RecipeSummary, RecipeRepositoryError> {
        let existing = Self::find_owned(txn, owner, recipe_id).await?;

        if let Some(ids) = &changes.tag_ids {
            Self::ensure_tags_exist(txn, ids).await?;
        }
        if let Some(ids) = &changes.ingredient_ids {
            Self::ensure_ingredients_exist(txn, ids).await?;
        }

        let mut active: recipes::ActiveModel = existing.clone().into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(time_minutes) = changes.time_minutes {
            active.time_minutes = Set(time_minutes);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        match changes.link {
            PatchField::Unset => {}
            PatchField::Null => active.link = Set(None),
            PatchField::Value(link) => active.link = Set(Some(link)),
        }

        let model = if active.is_changed() {
            active.update(txn).await.map_err(db_err)?
        } else {
            existing
        };

        let tag_ids = match changes.tag_ids {
            Some(ids) => {
                Self::replace_tag_links(txn, recipe_id, &ids).await?;
                sorted(ids)
            }
            None => Self::linked_tag_ids(txn, recipe_id).await?,
        };

        let ingredient_ids = match changes.ingredient_ids {
            Some(ids) => {
                Self::replace_ingredient_links(txn, recipe_id, &ids).await?;
                sorted(ids)
            }
            None => Self::linked_ingredient_ids(txn, recipe_id).await?,
        };

        Ok(model.to_summary(tag_ids, ingredient_ids))
    }
}

fn db_err(e: DbErr) -> RecipeRepositoryError {
    RecipeRepositoryError::DatabaseError(e.to_string())
}

fn sorted(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn create_recipe(&self, data: NewRecipe) -> Result<RecipeSummary, RecipeRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        match Self::create_in(&txn, data).await {
            Ok(summary) => {
                txn.commit().await.map_err(db_err)?;
                Ok(summary)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update_recipe(
        &self,
        owner: UserId,
        recipe_id: i32,
        changes: RecipeChanges,
    ) -> Result<RecipeSummary, RecipeRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        match Self::update_in(&txn, owner, recipe_id, changes).await {
            Ok(summary) => {
                txn.commit().await.map_err(db_err)?;
                Ok(summary)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_recipe(
        &self,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<Option<String>, RecipeRepositoryError> {
        let existing = Self::find_owned(&*self.db, owner, recipe_id).await?;

        // Link rows go with the recipe through ON DELETE CASCADE
        let result = recipes::Entity::delete_many()
            .filter(recipes::Column::Id.eq(recipe_id))
            .filter(recipes::Column::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(RecipeRepositoryError::RecipeNotFound);
        }

        Ok(existing.image)
    }

    async fn replace_image(
        &self,
        owner: UserId,
        recipe_id: i32,
        image_key: String,
    ) -> Result<Option<String>, RecipeRepositoryError> {
        let existing = Self::find_owned(&*self.db, owner, recipe_id).await?;
        let previous = existing.image.clone();

        let mut active: recipes::ActiveModel = existing.into();
        active.image = Set(Some(image_key));
        active.update(&*self.db).await.map_err(db_err)?;

        Ok(previous)
    }
}
