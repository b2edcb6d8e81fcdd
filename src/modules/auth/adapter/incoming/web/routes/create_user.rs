use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::field_errors;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{CreateUserCommand, CreateUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "test@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "testpass123")]
    pub password: String,

    #[schema(example = "Test Name")]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUserResponse {
    #[schema(example = "test@example.com")]
    pub email: String,

    #[schema(example = "Test Name")]
    pub name: String,
}

fn map_create_user_error(err: CreateUserError) -> HttpResponse {
    match err {
        CreateUserError::InvalidPassword(e) => field_errors::password_error(&e),

        CreateUserError::UserAlreadyExists => {
            warn!("Sign-up with an email that is already registered");
            field_errors::duplicate_email()
        }

        CreateUserError::HashingFailed(e) => {
            error!(error = %e, "Password hashing failed during sign-up");
            ApiResponse::internal_error()
        }

        CreateUserError::RepositoryError(e) => {
            error!(error = %e, "Repository error creating user");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a user
#[utoipa::path(
    post,
    path = "/user/create",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<CreatedUserResponse>)),
        (status = 400, description = "Invalid email, password or name, or email taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/user/create")]
pub async fn create_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateUserCommand::new(&req.email, req.password, &req.name) {
        Ok(c) => c,
        Err(e) => return field_errors::create_command_error(&e),
    };

    match data.users.create.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User signed up");
            ApiResponse::created(CreatedUserResponse {
                email: user.email,
                name: user.name,
            })
        }
        Err(e) => map_create_user_error(e),
    }
}
