use actix_web::{patch, put, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{
    name_error, ingredient_not_found, PatchIngredientRequest, IngredientRequest, IngredientResponse,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::ingredient::application::ports::incoming::use_cases::{
    UpdateIngredientCommand, UpdateIngredientError,
};
use crate::AppState;

async fn run_update(
    data: &AppState,
    user: AuthenticatedUser,
    id: i32,
    name: Option<&str>,
) -> HttpResponse {
    let command = match UpdateIngredientCommand::new(user.user_id, id, name) {
        Ok(c) => c,
        Err(e) => return name_error(&e),
    };

    match data.ingredients.update.execute(command).await {
        Ok(ingredient) => ApiResponse::success(IngredientResponse::from(ingredient)),
        Err(UpdateIngredientError::IngredientNotFound) => ingredient_not_found(),
        Err(UpdateIngredientError::RepositoryError(e)) => {
            error!(error = %e, "Updating ingredient failed");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    patch,
    path = "/recipe/ingredients/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingredient id")),
    request_body = PatchIngredientRequest,
    responses(
        (status = 200, description = "Ingredient updated", body = inline(SuccessResponse<IngredientResponse>)),
        (status = 400, description = "Blank or too long name", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign ingredient", body = ErrorResponse),
    )
)]
#[patch("/recipe/ingredients/{id}")]
pub async fn patch_ingredient_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PatchIngredientRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    run_update(&data, user, path.into_inner(), req.name.as_deref()).await
}

#[utoipa::path(
    put,
    path = "/recipe/ingredients/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingredient id")),
    request_body = IngredientRequest,
    responses(
        (status = 200, description = "Ingredient replaced", body = inline(SuccessResponse<IngredientResponse>)),
        (status = 400, description = "Missing, blank or too long name", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign ingredient", body = ErrorResponse),
    )
)]
#[put("/recipe/ingredients/{id}")]
pub async fn put_ingredient_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<IngredientRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    run_update(&data, user, path.into_inner(), Some(&req.name)).await
}
