use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CreateTokenCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTokenCommandError {
    #[error("This field may not be blank")]
    EmptyEmail,

    #[error("This field may not be blank")]
    EmptyPassword,
}

impl CreateTokenCommand {
    pub fn new(email: &str, password: String) -> Result<Self, CreateTokenCommandError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(CreateTokenCommandError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(CreateTokenCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_string(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTokenError {
    /// Unknown email, wrong password or inactive account.
    #[error("Unable to authenticate with provided credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait CreateTokenUseCase: Send + Sync {
    async fn execute(&self, command: CreateTokenCommand) -> Result<IssuedToken, CreateTokenError>;
}
