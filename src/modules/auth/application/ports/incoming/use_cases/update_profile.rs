use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{Email, EmailError, UserId},
    ports::incoming::{
        password_policy::PasswordPolicyError, use_cases::fetch_profile::UserProfile,
        use_cases::MAX_NAME_LENGTH,
    },
};

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

/// `None` keeps the stored value. A PUT request fills every field.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    email: Option<Email>,
    password: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must not exceed 255 characters")]
    NameTooLong,
}

impl UpdateProfileCommand {
    pub fn new(
        user_id: UserId,
        email: Option<&str>,
        password: Option<String>,
        name: Option<&str>,
    ) -> Result<Self, UpdateProfileCommandError> {
        let email = email.map(Email::parse).transpose()?;

        let name = match name.map(str::trim) {
            Some("") => return Err(UpdateProfileCommandError::EmptyName),
            Some(n) if n.chars().count() > MAX_NAME_LENGTH => {
                return Err(UpdateProfileCommandError::NameTooLong)
            }
            other => other.map(str::to_string),
        };

        Ok(Self {
            user_id,
            email,
            password,
            name,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("User with this email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<UserProfile, UpdateProfileError>;
}
