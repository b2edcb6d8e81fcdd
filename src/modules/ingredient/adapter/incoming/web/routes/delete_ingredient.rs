use actix_web::{delete, web, Responder};
use tracing::error;

use super::dto::ingredient_not_found;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::ingredient::application::ports::incoming::use_cases::DeleteIngredientError;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/recipe/ingredients/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingredient id")),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 404, description = "Unknown or foreign ingredient", body = ErrorResponse),
    )
)]
#[delete("/recipe/ingredients/{id}")]
pub async fn delete_ingredient_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.ingredients.delete.execute(user.user_id, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteIngredientError::IngredientNotFound) => ingredient_not_found(),
        Err(DeleteIngredientError::RepositoryError(e)) => {
            error!(error = %e, "Deleting ingredient failed");
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
    use crate::ingredient::application::services::in_memory::InMemoryIngredients;
    use crate::ingredient::application::ingredient_use_cases::IngredientUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator_for, bearer};

    #[actix_web::test]
    async fn delete_own_ingredient_is_204_then_404() {
        let me = Uuid::new_v4();
        let store = InMemoryIngredients::default();
        let id = store.seed(UserId::from(me), "Kale", false);

        let state = TestAppStateBuilder::default()
            .with_ingredients(IngredientUseCases::in_memory(store.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator_for(me))
                .service(delete_ingredient_handler),
        )
        .await;

        let uri = format!("/recipe/ingredients/{id}");
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
