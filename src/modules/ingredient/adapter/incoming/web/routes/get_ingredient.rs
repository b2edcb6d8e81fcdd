use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{ingredient_not_found, IngredientResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::ingredient::application::ports::incoming::use_cases::GetIngredientError;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/recipe/ingredients/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingredient id")),
    responses(
        (status = 200, description = "Ingredient", body = inline(SuccessResponse<IngredientResponse>)),
        (status = 404, description = "Unknown or foreign ingredient", body = ErrorResponse),
    )
)]
#[get("/recipe/ingredients/{id}")]
pub async fn get_ingredient_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.ingredients.get.execute(user.user_id, path.into_inner()).await {
        Ok(ingredient) => ApiResponse::success(IngredientResponse::from(ingredient)),
        Err(GetIngredientError::IngredientNotFound) => ingredient_not_found(),
        Err(GetIngredientError::QueryFailed(e)) => {
            error!(error = %e, "Fetching ingredient failed");
            ApiResponse::internal_error()
        }
    }
}
