use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::dto::IngredientResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListIngredientsParams {
    /// `1` keeps only ingredients used by at least one recipe
    pub assigned_only: Option<u8>,
}

/// List the caller's ingredients, newest first
#[utoipa::path(
    get,
    path = "/recipe/ingredients",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Ingredients", body = inline(SuccessResponse<Vec<IngredientResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/recipe/ingredients")]
pub async fn list_ingredients_handler(
    user: AuthenticatedUser,
    params: web::Query<ListIngredientsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let assigned_only = params.assigned_only.unwrap_or(0) != 0;

    match data.ingredients.list.execute(user.user_id, assigned_only).await {
        Ok(ingredients) => ApiResponse::success(
            ingredients.into_iter()
                .map(IngredientResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Listing ingredients failed");
            ApiResponse::internal_error()
        }
    }
}
