use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::{field_error, unknown_ingredient, unknown_tag, RecipeRequest, RecipeResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::recipe::application::ports::incoming::use_cases::{
    CreateRecipeCommand, CreateRecipeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a recipe owned by the caller
#[utoipa::path(
    post,
    path = "/recipe/recipes",
    tag = "recipe",
    security(("bearer_auth" = [])),
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 400, description = "Invalid field or unknown tag / ingredient", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/recipe/recipes")]
pub async fn create_recipe_handler(
    user: AuthenticatedUser,
    req: web::Json<RecipeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateRecipeCommand::new(user.user_id, req.into_inner().into()) {
        Ok(c) => c,
        Err(e) => return field_error(&e),
    };

    match data.recipes.create.execute(command).await {
        Ok(recipe) => ApiResponse::created(RecipeResponse::from(recipe)),
        Err(CreateRecipeError::UnknownTag(id)) => unknown_tag(id),
        Err(CreateRecipeError::UnknownIngredient(id)) => unknown_ingredient(id),
        Err(CreateRecipeError::RepositoryError(e)) => {
            error!(error = %e, "Creating recipe failed");
            ApiResponse::internal_error()
        }
    }
}
