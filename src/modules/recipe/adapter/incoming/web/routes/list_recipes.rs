use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::dto::RecipeResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::recipe::application::domain::entities::RecipeFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    /// Comma separated tag ids, e.g. `1,2`
    pub tags: Option<String>,
    /// Comma separated ingredient ids
    pub ingredients: Option<String>,
}

/// List the caller's recipes, newest first
#[utoipa::path(
    get,
    path = "/recipe/recipes",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes", body = inline(SuccessResponse<Vec<RecipeResponse>>)),
        (status = 400, description = "Non-integer id in a filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/recipe/recipes")]
pub async fn list_recipes_handler(
    user: AuthenticatedUser,
    params: web::Query<ListRecipesParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match RecipeFilter::parse(params.tags.as_deref(), params.ingredients.as_deref())
    {
        Ok(f) => f,
        Err(e) => return ApiResponse::validation_error("INVALID_FILTER", e.param, &e.to_string()),
    };

    match data.recipes.list.execute(user.user_id, filter).await {
        Ok(recipes) => ApiResponse::success(
            recipes
                .into_iter()
                .map(RecipeResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Listing recipes failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::recipe::application::recipe_use_cases::RecipeUseCases;
    use crate::recipe::application::services::in_memory::{InMemoryImages, InMemoryRecipes};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator_for, bearer};

    async fn get(store: InMemoryRecipes, caller: Uuid, uri: &str) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_recipes(RecipeUseCases::in_memory(store, InMemoryImages::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator_for(caller))
                .service(list_recipes_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn lists_summaries_newest_first() {
        // Arrange
        let me = Uuid::new_v4();
        let store = InMemoryRecipes::default().with_tag(1, "Vegan");
        let first = store.seed(UserId::from(me), "Thai vegetable curry");
        store.seed(UserId::from(me), "Aubergine with tahini");
        store.link_tag(first, 1);

        // Act
        let (status, body) = get(store, me, "/recipe/recipes").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["title"], "Aubergine with tahini");
        assert_eq!(body["data"][1]["tags"], serde_json::json!([1]));
        assert_eq!(body["data"][1]["price"], "5.25");
    }

    #[actix_web::test]
    async fn recipes_of_other_users_are_hidden() {
        let me = Uuid::new_v4();
        let store = InMemoryRecipes::default();
        store.seed(UserId::from(Uuid::new_v4()), "Fish and chips");
        store.seed(UserId::from(me), "Sample recipe");

        let (_, body) = get(store, me, "/recipe/recipes").await;

        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn filters_by_tags_and_ingredients() {
        let me = Uuid::new_v4();
        let owner = UserId::from(me);
        let store = InMemoryRecipes::default()
            .with_tag(1, "Vegan")
            .with_ingredient(2, "Feta cheese");
        let both = store.seed(owner, "Posh beans on toast");
        let tag_only = store.seed(owner, "Thai vegetable curry");
        store.seed(owner, "Fish and chips");
        store.link_tag(both, 1);
        store.link_ingredient(both, 2);
        store.link_tag(tag_only, 1);

        let (_, by_tag) = get(store.clone(), me, "/recipe/recipes?tags=1").await;
        let (_, by_both) = get(store, me, "/recipe/recipes?tags=1&ingredients=2").await;

        assert_eq!(by_tag["data"].as_array().unwrap().len(), 2);
        let both_rows = by_both["data"].as_array().unwrap();
        assert_eq!(both_rows.len(), 1);
        assert_eq!(both_rows[0]["id"], both);
    }

    #[actix_web::test]
    async fn non_integer_filter_is_400() {
        let (status, body) = get(
            InMemoryRecipes::default(),
            Uuid::new_v4(),
            "/recipe/recipes?tags=1,abc",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_FILTER");
    }
}
