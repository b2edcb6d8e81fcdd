use actix_web::{delete, web, Responder};
use tracing::error;

use super::dto::recipe_not_found;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::recipe::application::ports::incoming::use_cases::DeleteRecipeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/recipe/recipes/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Unknown or foreign recipe", body = ErrorResponse),
    )
)]
#[delete("/recipe/recipes/{id}")]
pub async fn delete_recipe_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.recipes.delete.execute(user.user_id, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteRecipeError::RecipeNotFound) => recipe_not_found(),
        Err(DeleteRecipeError::RepositoryError(e)) => {
            error!(error = %e, "Deleting recipe failed");
            ApiResponse::internal_error()
        }
    }
}
