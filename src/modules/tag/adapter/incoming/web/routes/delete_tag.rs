use actix_web::{delete, web, Responder};
use tracing::error;

use super::dto::tag_not_found;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::tag::application::ports::incoming::use_cases::DeleteTagError;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/recipe/tags/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tag id")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 404, description = "Unknown or foreign tag", body = ErrorResponse),
    )
)]
#[delete("/recipe/tags/{id}")]
pub async fn delete_tag_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tags.delete.execute(user.user_id, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteTagError::TagNotFound) => tag_not_found(),
        Err(DeleteTagError::RepositoryError(e)) => {
            error!(error = %e, "Deleting tag failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::tag::application::services::in_memory::InMemoryTags;
    use crate::tag::application::tag_use_cases::TagUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator_for, bearer};

    #[actix_web::test]
    async fn delete_own_tag_is_204_then_404() {
        let me = Uuid::new_v4();
        let store = InMemoryTags::default();
        let id = store.seed(UserId::from(me), "Vegan", false);

        let state = TestAppStateBuilder::default()
            .with_tags(TagUseCases::in_memory(store.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator_for(me))
                .service(delete_tag_handler),
        )
        .await;

        let uri = format!("/recipe/tags/{id}");
        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(bearer())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );
        assert!(store.name_of(id).is_none());

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(bearer())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
