use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{AuthenticateError, AuthenticateUseCase},
        outgoing::{token_provider::ACCESS_TOKEN_TYPE, TokenProvider, UserQuery},
    },
};

#[derive(Clone)]
pub struct AuthenticateService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> AuthenticateService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> AuthenticateUseCase for AuthenticateService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<UserId, AuthenticateError> {
        let claims = self.token_provider.verify_token(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            AuthenticateError::InvalidToken
        })?;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            warn!(token_type = %claims.token_type, "Rejected non-access token");
            return Err(AuthenticateError::InvalidToken);
        }

        let user_id = UserId::from(claims.sub);

        // Signature alone is not enough: the account may be gone
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| AuthenticateError::QueryError(e.to_string()))?;

        match user {
            Some(user) if user.is_active => Ok(user_id),
            Some(_) => {
                debug!(user_id = %user_id, "Token for inactive user");
                Err(AuthenticateError::InactiveUser)
            }
            None => {
                debug!(user_id = %user_id, "Token for deleted user");
                Err(AuthenticateError::InactiveUser)
            }
        }
    }
}
