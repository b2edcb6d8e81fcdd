use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::{name_error, IngredientRequest, IngredientResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::ingredient::application::ports::incoming::use_cases::CreateIngredientCommand;
use crate::AppState;

/// Create a ingredient owned by the caller
#[utoipa::path(
    post,
    path = "/recipe/ingredients",
    tag = "recipe",
    security(("bearer_auth" = [])),
    request_body = IngredientRequest,
    responses(
        (status = 201, description = "Ingredient created", body = inline(SuccessResponse<IngredientResponse>)),
        (status = 400, description = "Blank or too long name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/recipe/ingredients")]
pub async fn create_ingredient_handler(
    user: AuthenticatedUser,
    req: web::Json<IngredientRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateIngredientCommand::new(user.user_id, &req.name) {
        Ok(c) => c,
        Err(e) => return name_error(&e),
    };

    match data.ingredients.create.execute(command).await {
        Ok(ingredient) => ApiResponse::created(IngredientResponse::from(ingredient)),
        Err(e) => {
            error!(error = %e, "Creating ingredient failed");
            ApiResponse::internal_error()
        }
    }
}
