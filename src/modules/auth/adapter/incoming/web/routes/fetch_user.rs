use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{FetchProfileError, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[schema(example = "test@example.com")]
    pub email: String,

    #[schema(example = "Test Name")]
    pub name: String,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            email: profile.email,
            name: profile.name,
        }
    }
}

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/user/me",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/user/me")]
pub async fn fetch_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Query error fetching profile");
            ApiResponse::internal_error()
        }
    }
}
