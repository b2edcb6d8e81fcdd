use actix_web::{patch, put, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{name_error, tag_not_found, PatchTagRequest, TagRequest, TagResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::tag::application::ports::incoming::use_cases::{UpdateTagCommand, UpdateTagError};
use crate::AppState;

async fn run_update(
    data: &AppState,
    user: AuthenticatedUser,
    id: i32,
    name: Option<&str>,
) -> HttpResponse {
    let command = match UpdateTagCommand::new(user.user_id, id, name) {
        Ok(c) => c,
        Err(e) => return name_error(&e),
    };

    match data.tags.update.execute(command).await {
        Ok(tag) => ApiResponse::success(TagResponse::from(tag)),
        Err(UpdateTagError::TagNotFound) => tag_not_found(),
        Err(UpdateTagError::RepositoryError(e)) => {
            error!(error = %e, "Updating tag failed");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    patch,
    path = "/recipe/tags/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tag id")),
    request_body = PatchTagRequest,
    responses(
        (status = 200, description = "Tag updated", body = inline(SuccessResponse<TagResponse>)),
        (status = 400, description = "Blank or too long name", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign tag", body = ErrorResponse),
    )
)]
#[patch("/recipe/tags/{id}")]
pub async fn patch_tag_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PatchTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    run_update(&data, user, path.into_inner(), req.name.as_deref()).await
}

#[utoipa::path(
    put,
    path = "/recipe/tags/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tag id")),
    request_body = TagRequest,
    responses(
        (status = 200, description = "Tag replaced", body = inline(SuccessResponse<TagResponse>)),
        (status = 400, description = "Missing, blank or too long name", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign tag", body = ErrorResponse),
    )
)]
#[put("/recipe/tags/{id}")]
pub async fn put_tag_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<TagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    run_update(&data, user, path.into_inner(), Some(&req.name)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::shared::api::custom_json_config;
    use crate::tag::application::services::in_memory::InMemoryTags;
    use crate::tag::application::tag_use_cases::TagUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator_for, bearer};

    async fn send(
        store: InMemoryTags,
        caller: Uuid,
        req: test::TestRequest,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_tags(TagUseCases::in_memory(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .app_data(authenticator_for(caller))
                .service(patch_tag_handler)
                .service(put_tag_handler),
        )
        .await;

        let resp = test::call_service(&app, req.insert_header(bearer()).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn patch_renames_tag() {
        let me = Uuid::new_v4();
        let store = InMemoryTags::default();
        let id = store.seed(UserId::from(me), "After Dinner", false);

        let (status, body) = send(
            store.clone(),
            me,
            test::TestRequest::patch()
                .uri(&format!("/recipe/tags/{id}"))
                .set_json(json!({ "name": "Dessert" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Dessert");
        assert_eq!(store.name_of(id).as_deref(), Some("Dessert"));
    }

    #[actix_web::test]
    async fn put_without_name_is_400() {
        let me = Uuid::new_v4();
        let store = InMemoryTags::default();
        let id = store.seed(UserId::from(me), "Dessert", false);

        let (status, body) = send(
            store,
            me,
            test::TestRequest::put()
                .uri(&format!("/recipe/tags/{id}"))
                .set_json(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn patch_foreign_tag_is_404() {
        let store = InMemoryTags::default();
        let id = store.seed(UserId::from(Uuid::new_v4()), "Dessert", false);

        let (status, _) = send(
            store,
            Uuid::new_v4(),
            test::TestRequest::patch()
                .uri(&format!("/recipe/tags/{id}"))
                .set_json(json!({ "name": "Mine" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
