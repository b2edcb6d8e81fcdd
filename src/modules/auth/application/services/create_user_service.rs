use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::{
        password_policy::PasswordPolicy,
        use_cases::{CreateSuperuserUseCase, CreateUserCommand, CreateUserError, CreateUserUseCase},
    },
    outgoing::{CreateUserData, PasswordHasher, UserRepository, UserRepositoryError, UserResult},
};

#[derive(Clone)]
pub struct CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<R> CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            password_policy,
        }
    }

    async fn create(
        &self,
        command: CreateUserCommand,
        elevated: bool,
    ) -> Result<UserResult, CreateUserError> {
        self.password_policy.validate(command.password())?;

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            email: command.email().clone(),
            name: command.name().to_string(),
            password_hash,
            is_staff: elevated,
            is_superuser: elevated,
        };

        let user = self
            .repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, superuser = elevated, "User created");

        Ok(user)
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        self.create(command, false).await
    }
}

#[async_trait]
impl<R> CreateSuperuserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        self.create(command, true).await
    }
}
