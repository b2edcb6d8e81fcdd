use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::{name_error, TagRequest, TagResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::tag::application::ports::incoming::use_cases::CreateTagCommand;
use crate::AppState;

/// Create a tag owned by the caller
#[utoipa::path(
    post,
    path = "/recipe/tags",
    tag = "recipe",
    security(("bearer_auth" = [])),
    request_body = TagRequest,
    responses(
        (status = 201, description = "Tag created", body = inline(SuccessResponse<TagResponse>)),
        (status = 400, description = "Blank or too long name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/recipe/tags")]
pub async fn create_tag_handler(
    user: AuthenticatedUser,
    req: web::Json<TagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateTagCommand::new(user.user_id, &req.name) {
        Ok(c) => c,
        Err(e) => return name_error(&e),
    };

    match data.tags.create.execute(command).await {
        Ok(tag) => ApiResponse::created(TagResponse::from(tag)),
        Err(e) => {
            error!(error = %e, "Creating tag failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::tag::application::ports::outgoing::TagQuery;
    use crate::tag::application::services::in_memory::InMemoryTags;
    use crate::tag::application::tag_use_cases::TagUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{
        authenticator_for, authenticator_without_user, bearer,
    };

    async fn post(store: InMemoryTags, caller: Uuid, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_tags(TagUseCases::in_memory(store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator_for(caller))
                .service(create_tag_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recipe/tags")
            .insert_header(bearer())
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn create_assigns_the_caller() {
        // Arrange
        let me = Uuid::new_v4();
        let store = InMemoryTags::default();

        // Act
        let (status, body) = post(store.clone(), me, json!({ "name": "Vegan" })).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["name"], "Vegan");

        let mine = store.list(UserId::from(me), false).await.unwrap();
        assert_eq!(mine.len(), 1);
    }

    #[actix_web::test]
    async fn blank_name_is_400() {
        let (status, body) =
            post(InMemoryTags::default(), Uuid::new_v4(), json!({ "name": " " })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_NAME");
        assert!(body["error"]["fields"]["name"].is_string());
    }

    #[actix_web::test]
    async fn token_of_deleted_account_is_401() {
        let ghost = Uuid::new_v4();
        let store = InMemoryTags::default();
        let state = TestAppStateBuilder::default()
            .with_tags(TagUseCases::in_memory(store.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator_without_user(ghost))
                .service(create_tag_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recipe/tags")
            .insert_header(bearer())
            .set_json(json!({ "name": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
        assert!(store.list(UserId::from(ghost), false).await.unwrap().is_empty());
    }
}
