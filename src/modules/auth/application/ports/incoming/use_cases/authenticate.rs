use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticateError {
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Deleted or deactivated since the token was issued.
    #[error("Token subject is not an active user")]
    InactiveUser,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Resolves a bearer token to the active account it was issued for.
#[async_trait]
pub trait AuthenticateUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<UserId, AuthenticateError>;
}
