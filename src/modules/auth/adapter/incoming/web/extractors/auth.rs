use actix_web::{
    dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    AuthenticateError, AuthenticateUseCase,
};
use crate::shared::api::ApiResponse;

/// Caller identified by a valid `Authorization: Bearer <token>` header whose
/// subject is still an active account.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticator =
            match req.app_data::<web::Data<Arc<dyn AuthenticateUseCase + Send + Sync>>>() {
                Some(authenticator) => Arc::clone(authenticator.get_ref()),
                None => {
                    tracing::error!("Authenticator missing from app data");
                    return Box::pin(async {
                        Err(create_api_error(ApiResponse::internal_error()))
                    });
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t.to_string(),
            None => {
                return Box::pin(async {
                    Err(create_api_error(ApiResponse::unauthorized(
                        "MISSING_AUTH_HEADER",
                        "Authentication credentials were not provided",
                    )))
                });
            }
        };

        Box::pin(async move {
            match authenticator.execute(&token).await {
                Ok(user_id) => Ok(AuthenticatedUser { user_id }),
                Err(AuthenticateError::InvalidToken) | Err(AuthenticateError::InactiveUser) => {
                    Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN",
                        "Invalid or expired token",
                    )))
                }
                Err(AuthenticateError::QueryError(e)) => {
                    tracing::error!(error = %e, "Failed to resolve token subject");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
