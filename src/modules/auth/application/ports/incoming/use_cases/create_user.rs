use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{Email, EmailError},
    ports::{
        incoming::{password_policy::PasswordPolicyError, use_cases::MAX_NAME_LENGTH},
        outgoing::UserResult,
    },
};

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    email: Email,
    password: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must not exceed 255 characters")]
    NameTooLong,
}

impl CreateUserCommand {
    /// Regular sign-up: a non-blank name is required.
    pub fn new(email: &str, password: String, name: &str) -> Result<Self, CreateUserCommandError> {
        let command = Self::build(email, password, name)?;

        if command.name.is_empty() {
            return Err(CreateUserCommandError::EmptyName);
        }

        Ok(command)
    }

    /// Console-created superusers may leave the name empty.
    pub fn superuser(
        email: &str,
        password: String,
        name: Option<&str>,
    ) -> Result<Self, CreateUserCommandError> {
        Self::build(email, password, name.unwrap_or_default())
    }

    fn build(email: &str, password: String, name: &str) -> Result<Self, CreateUserCommandError> {
        let email = Email::parse(email)?;
        let name = name.trim();

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(CreateUserCommandError::NameTooLong);
        }

        Ok(Self {
            email,
            password,
            name: name.to_string(),
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError>;
}

/// Same validation as a regular user, persisted with staff and superuser flags.
#[async_trait]
pub trait CreateSuperuserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError>;
}
