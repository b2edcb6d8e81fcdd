use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete the authenticated account
///
/// Recipes and tags go with it. Ingredients are kept without an owner.
#[utoipa::path(
    delete,
    path = "/user/me",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[delete("/user/me")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.delete.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Account deleted");
            ApiResponse::no_content()
        }

        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Repository error deleting account");
            ApiResponse::internal_error()
        }
    }
}
