use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::{Email, UserId};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: Email,
    pub name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub email: Option<Email>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
}

impl UpdateUserData {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password_hash.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResult {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<UserResult, UserRepositoryError>;

    /// Removes the account in one transaction.
    /// Recipes and tags owned by the user are deleted with it.
    /// Ingredients are detached and kept.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
