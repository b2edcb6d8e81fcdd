use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::AuthenticateUseCase;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};
use crate::auth::application::services::AuthenticateService;

pub const TEST_BEARER_TOKEN: &str = "test-access-token";

/// Accepts only [`TEST_BEARER_TOKEN`] and resolves it to a fixed user.
pub struct StubTokenProvider {
    user_id: Uuid,
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        Ok(TEST_BEARER_TOKEN.to_string())
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token != TEST_BEARER_TOKEN {
            return Err(TokenError::InvalidSignature);
        }

        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "recipe-api-test".to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        })
    }
}

/// Knows at most one account, always active.
#[derive(Clone)]
pub struct StubUserQuery {
    known: Option<Uuid>,
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self
            .known
            .filter(|id| UserId::from(*id) == user_id)
            .map(|id| UserQueryResult {
                id: UserId::from(id),
                email: "caller@example.com".to_string(),
                name: "Caller".to_string(),
                password_hash: "hash".to_string(),
                is_active: true,
                is_staff: false,
                is_superuser: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(None)
    }
}

fn authenticator(
    token_subject: Uuid,
    known: Option<Uuid>,
) -> web::Data<Arc<dyn AuthenticateUseCase + Send + Sync>> {
    let service = AuthenticateService::new(
        StubUserQuery { known },
        Arc::new(StubTokenProvider {
            user_id: token_subject,
        }),
    );
    web::Data::new(Arc::new(service) as Arc<dyn AuthenticateUseCase + Send + Sync>)
}

/// [`TEST_BEARER_TOKEN`] authenticates as `user_id`, an existing active account.
pub fn authenticator_for(user_id: Uuid) -> web::Data<Arc<dyn AuthenticateUseCase + Send + Sync>> {
    authenticator(user_id, Some(user_id))
}

/// [`TEST_BEARER_TOKEN`] is correctly signed for `user_id`, but no such account exists.
pub fn authenticator_without_user(
    user_id: Uuid,
) -> web::Data<Arc<dyn AuthenticateUseCase + Send + Sync>> {
    authenticator(user_id, None)
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_BEARER_TOKEN}"))
}
