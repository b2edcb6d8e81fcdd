use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::{
        password_policy::PasswordPolicy,
        use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase, UserProfile},
    },
    outgoing::{PasswordHasher, UpdateUserData, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<R> UpdateProfileService<R>
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
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        let password_hash = match command.password() {
            Some(password) => {
                self.password_policy.validate(password)?;
                let hash = self
                    .password_hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateProfileError::HashingFailed(e.to_string()))?;
                Some(hash)
            }
            None => None,
        };

        let data = UpdateUserData {
            email: command.email().cloned(),
            name: command.name().map(str::to_string),
            password_hash,
        };

        let user = self
            .repository
            .update_user(command.user_id(), data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => UpdateProfileError::EmailAlreadyExists,
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Profile updated");

        Ok(UserProfile {
            email: user.email,
            name: user.name,
        })
    }
}
