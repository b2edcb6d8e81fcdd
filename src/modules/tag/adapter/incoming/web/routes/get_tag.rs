use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{tag_not_found, TagResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::tag::application::ports::incoming::use_cases::GetTagError;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/recipe/tags/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag", body = inline(SuccessResponse<TagResponse>)),
        (status = 404, description = "Unknown or foreign tag", body = ErrorResponse),
    )
)]
#[get("/recipe/tags/{id}")]
pub async fn get_tag_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tags.get.execute(user.user_id, path.into_inner()).await {
        Ok(tag) => ApiResponse::success(TagResponse::from(tag)),
        Err(GetTagError::TagNotFound) => tag_not_found(),
        Err(GetTagError::QueryFailed(e)) => {
            error!(error = %e, "Fetching tag failed");
            ApiResponse::internal_error()
        }
    }
}
