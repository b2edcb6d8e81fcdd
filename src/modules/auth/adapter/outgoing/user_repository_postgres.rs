use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::modules::ingredient::adapter::outgoing::sea_orm_entity::ingredients;
use crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipes;
use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: UserId::from(model.id),
            email: model.email,
            name: model.name,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
        }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email.into_inner()),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            is_active: Set(true),
            is_staff: Set(data.is_staff),
            is_superuser: Set(data.is_superuser),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if data.is_empty() {
            return Ok(Self::map_to_user_result(user));
        }

        let mut active_user: UserActiveModel = user.into();

        if let Some(email) = data.email {
            active_user.email = Set(email.into_inner());
        }
        if let Some(name) = data.name {
            active_user.name = Set(name);
        }
        if let Some(password_hash) = data.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_user_result(updated))
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let owner = user_id.value();
        let db_err = |e: DbErr| UserRepositoryError::DatabaseError(e.to_string());

        let txn = self.db.begin().await.map_err(db_err)?;

        recipes::Entity::delete_many()
            .filter(recipes::Column::UserId.eq(owner))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        tags::Entity::delete_many()
            .filter(tags::Column::UserId.eq(owner))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        // Ingredients outlive their owner
        ingredients::Entity::update_many()
            .col_expr(ingredients::Column::UserId, Expr::value(Option::<Uuid>::None))
            .filter(ingredients::Column::UserId.eq(owner))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let deleted = UserEntity::delete_by_id(owner)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if deleted.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(UserRepositoryError::UserNotFound);
        }

        txn.commit().await.map_err(db_err)?;

        Ok(())
    }
}
