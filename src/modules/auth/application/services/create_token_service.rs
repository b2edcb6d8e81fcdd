use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::{
    domain::entities::Email,
    ports::{
        incoming::use_cases::{
            CreateTokenCommand, CreateTokenError, CreateTokenUseCase, IssuedToken,
        },
        outgoing::{PasswordHasher, TokenProvider, UserQuery},
    },
};

#[derive(Clone)]
pub struct CreateTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> CreateTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> CreateTokenUseCase for CreateTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: CreateTokenCommand) -> Result<IssuedToken, CreateTokenError> {
        // Stored emails are normalized; a malformed one can never match
        let email =
            Email::parse(command.email()).map_err(|_| CreateTokenError::InvalidCredentials)?;

        let user = self
            .query
            .find_by_email(email.as_str())
            .await
            .map_err(|e| CreateTokenError::QueryError(e.to_string()))?
            .ok_or(CreateTokenError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| CreateTokenError::VerificationFailed(e.to_string()))?;

        if !matches {
            debug!(user_id = %user.id, "Password mismatch");
            return Err(CreateTokenError::InvalidCredentials);
        }

        if !user.is_active {
            debug!(user_id = %user.id, "Inactive account refused a token");
            return Err(CreateTokenError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| CreateTokenError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "Token issued");

        Ok(IssuedToken { token })
    }
}
