use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{recipe_not_found, RecipeDetailResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::recipe::application::ports::incoming::use_cases::GetRecipeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Recipe detail with tag and ingredient names
#[utoipa::path(
    get,
    path = "/recipe/recipes/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe", body = inline(SuccessResponse<RecipeDetailResponse>)),
        (status = 404, description = "Unknown or foreign recipe", body = ErrorResponse),
    )
)]
#[get("/recipe/recipes/{id}")]
pub async fn get_recipe_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.recipes.get.execute(user.user_id, path.into_inner()).await {
        Ok(recipe) => ApiResponse::success(RecipeDetailResponse::from(recipe)),
        Err(GetRecipeError::RecipeNotFound) => recipe_not_found(),
        Err(GetRecipeError::QueryFailed(e)) => {
            error!(error = %e, "Fetching recipe failed");
            ApiResponse::internal_error()
        }
    }
}
