use actix_web::{patch, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::{field_errors, fetch_user::UserProfileResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// Every field optional; omitted fields keep their value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PatchProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PutProfileRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

//
// ──────────────────────────────────────────────────────────
// Shared flow
// ──────────────────────────────────────────────────────────
//

fn map_update_profile_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::InvalidPassword(e) => field_errors::password_error(&e),

        UpdateProfileError::EmailAlreadyExists => {
            warn!("Profile update to an email that is already registered");
            field_errors::duplicate_email()
        }

        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        UpdateProfileError::HashingFailed(e) | UpdateProfileError::RepositoryError(e) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

async fn run_update(
    data: &AppState,
    command: Result<UpdateProfileCommand, HttpResponse>,
) -> HttpResponse {
    let command = match command {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match data.users.update_profile.execute(command).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),
        Err(e) => map_update_profile_error(e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Partially update the authenticated user
#[utoipa::path(
    patch,
    path = "/user/me",
    tag = "user",
    security(("bearer_auth" = [])),
    request_body = PatchProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[patch("/user/me")]
pub async fn patch_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<PatchProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = UpdateProfileCommand::new(
        user.user_id,
        req.email.as_deref(),
        req.password,
        req.name.as_deref(),
    )
    .map_err(|e| field_errors::update_command_error(&e));

    run_update(&data, command).await
}

/// Replace email, password and name of the authenticated user
#[utoipa::path(
    put,
    path = "/user/me",
    tag = "user",
    security(("bearer_auth" = [])),
    request_body = PutProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[put("/user/me")]
pub async fn put_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<PutProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = UpdateProfileCommand::new(
        user.user_id,
        Some(&req.email),
        Some(req.password),
        Some(&req.name),
    )
    .map_err(|e| field_errors::update_command_error(&e));

    run_update(&data, command).await
}
