use actix_web::{patch, put, web, HttpResponse, Responder};
use tracing::error;

use super::dto::{
    field_error, recipe_not_found, unknown_ingredient, unknown_tag, PatchRecipeRequest,
    RecipeRequest, RecipeResponse,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::recipe::application::ports::incoming::use_cases::{
    RecipeFieldError, UpdateRecipeCommand, UpdateRecipeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn run_update(
    data: &AppState,
    command: Result<UpdateRecipeCommand, RecipeFieldError>,
) -> HttpResponse {
    let command = match command {
        Ok(c) => c,
        Err(e) => return field_error(&e),
    };

    match data.recipes.update.execute(command).await {
        Ok(recipe) => ApiResponse::success(RecipeResponse::from(recipe)),
        Err(UpdateRecipeError::RecipeNotFound) => recipe_not_found(),
        Err(UpdateRecipeError::UnknownTag(id)) => unknown_tag(id),
        Err(UpdateRecipeError::UnknownIngredient(id)) => unknown_ingredient(id),
        Err(UpdateRecipeError::RepositoryError(e)) => {
            error!(error = %e, "Updating recipe failed");
            ApiResponse::internal_error()
        }
    }
}

/// Change only the fields sent
#[utoipa::path(
    patch,
    path = "/recipe/recipes/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Recipe id")),
    request_body = PatchRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 400, description = "Invalid field or unknown tag / ingredient", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign recipe", body = ErrorResponse),
    )
)]
#[patch("/recipe/recipes/{id}")]
pub async fn patch_recipe_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PatchRecipeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command =
        UpdateRecipeCommand::patch(user.user_id, path.into_inner(), req.into_inner().into());
    run_update(&data, command).await
}

/// Replace the whole recipe; omitted tags, ingredients and link are cleared
#[utoipa::path(
    put,
    path = "/recipe/recipes/{id}",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Recipe id")),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe replaced", body = inline(SuccessResponse<RecipeResponse>)),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign recipe", body = ErrorResponse),
    )
)]
#[put("/recipe/recipes/{id}")]
pub async fn put_recipe_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<RecipeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command =
        UpdateRecipeCommand::replace(user.user_id, path.into_inner(), req.into_inner().into());
    run_update(&data, command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::recipe::application::recipe_use_cases::RecipeUseCases;
    use crate::recipe::application::services::in_memory::{InMemoryImages, InMemoryRecipes};
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator_for, bearer};

    async fn send(
        store: InMemoryRecipes,
        caller: Uuid,
        req: test::TestRequest,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_recipes(RecipeUseCases::in_memory(store, InMemoryImages::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .app_data(authenticator_for(caller))
                .service(patch_recipe_handler)
                .service(put_recipe_handler),
        )
        .await;

        let resp = test::call_service(&app, req.insert_header(bearer()).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn linked_store(owner: UserId) -> (InMemoryRecipes, i32) {
        let store = InMemoryRecipes::default()
            .with_tag(1, "Breakfast")
            .with_tag(2, "Lunch")
            .with_ingredient(3, "Eggs");
        let id = store.seed(owner, "Sample recipe");
        store.link_tag(id, 1);
        store.link_ingredient(id, 3);
        (store, id)
    }

    #[actix_web::test]
    async fn patch_changes_title_only() {
        // Arrange
        let me = Uuid::new_v4();
        let (store, id) = linked_store(UserId::from(me));

        // Act
        let (status, body) = send(
            store.clone(),
            me,
            test::TestRequest::patch()
                .uri(&format!("/recipe/recipes/{id}"))
                .set_json(json!({ "title": "New recipe title" })),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "New recipe title");
        assert_eq!(body["data"]["tags"], json!([1]));
        assert_eq!(body["data"]["ingredients"], json!([3]));
        assert_eq!(store.get(id).unwrap().time_minutes, 22);
    }

    #[actix_web::test]
    async fn patch_tags_replaces_the_set() {
        let me = Uuid::new_v4();
        let (store, id) = linked_store(UserId::from(me));

        let (status, body) = send(
            store,
            me,
            test::TestRequest::patch()
                .uri(&format!("/recipe/recipes/{id}"))
                .set_json(json!({ "tags": [2] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tags"], json!([2]));
    }

    #[actix_web::test]
    async fn put_clears_omitted_links() {
        let me = Uuid::new_v4();
        let (store, id) = linked_store(UserId::from(me));

        let (status, body) = send(
            store.clone(),
            me,
            test::TestRequest::put()
                .uri(&format!("/recipe/recipes/{id}"))
                .set_json(json!({
                    "title": "Spaghetti carbonara",
                    "time_minutes": 25,
                    "price": "5.00"
                })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tags"], json!([]));
        assert_eq!(body["data"]["ingredients"], json!([]));
        assert!(body["data"]["link"].is_null());
        assert_eq!(store.get(id).unwrap().title, "Spaghetti carbonara");
    }

    #[actix_web::test]
    async fn put_without_price_is_400() {
        let me = Uuid::new_v4();
        let (store, id) = linked_store(UserId::from(me));

        let (status, _) = send(
            store,
            me,
            test::TestRequest::put()
                .uri(&format!("/recipe/recipes/{id}"))
                .set_json(json!({ "title": "x", "time_minutes": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn foreign_recipe_is_404_and_unchanged() {
        let (store, id) = linked_store(UserId::from(Uuid::new_v4()));

        let (status, _) = send(
            store.clone(),
            Uuid::new_v4(),
            test::TestRequest::patch()
                .uri(&format!("/recipe/recipes/{id}"))
                .set_json(json!({ "title": "Mine now" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.get(id).unwrap().title, "Sample recipe");
    }
}
