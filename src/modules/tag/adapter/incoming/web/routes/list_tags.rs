use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::dto::TagResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTagsParams {
    /// `1` keeps only tags used by at least one recipe
    pub assigned_only: Option<u8>,
}

/// List the caller's tags, newest first
#[utoipa::path(
    get,
    path = "/recipe/tags",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(ListTagsParams),
    responses(
        (status = 200, description = "Tags", body = inline(SuccessResponse<Vec<TagResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/recipe/tags")]
pub async fn list_tags_handler(
    user: AuthenticatedUser,
    params: web::Query<ListTagsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let assigned_only = params.assigned_only.unwrap_or(0) != 0;

    match data.tags.list.execute(user.user_id, assigned_only).await {
        Ok(tags) => ApiResponse::success(
            tags.into_iter()
                .map(TagResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Listing tags failed");
            ApiResponse::internal_error()
        }
    }
}
