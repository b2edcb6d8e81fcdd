use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CreateTokenRequest, CreateUserRequest, CreatedUserResponse, PatchProfileRequest,
    PutProfileRequest, TokenResponse, UserProfileResponse,
};
use crate::ingredient::adapter::incoming::web::routes::{
    IngredientRequest, IngredientResponse, PatchIngredientRequest,
};
use crate::recipe::adapter::incoming::web::routes::{
    NamedItemResponse, PatchRecipeRequest, RecipeDetailResponse, RecipeImageResponse,
    RecipeRequest, RecipeResponse, UploadImageForm,
};
use crate::tag::adapter::incoming::web::routes::{PatchTagRequest, TagRequest, TagResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        version = "1.0.0",
        description = "Users, tags, ingredients and recipes with image uploads"
    ),
    paths(
        // User
        crate::auth::adapter::incoming::web::routes::create_user_handler,
        crate::auth::adapter::incoming::web::routes::create_token_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user_handler,
        crate::auth::adapter::incoming::web::routes::patch_profile_handler,
        crate::auth::adapter::incoming::web::routes::put_profile_handler,
        crate::auth::adapter::incoming::web::routes::delete_user_handler,

        // Tags
        crate::tag::adapter::incoming::web::routes::list_tags_handler,
        crate::tag::adapter::incoming::web::routes::get_tag_handler,
        crate::tag::adapter::incoming::web::routes::create_tag_handler,
        crate::tag::adapter::incoming::web::routes::patch_tag_handler,
        crate::tag::adapter::incoming::web::routes::put_tag_handler,
        crate::tag::adapter::incoming::web::routes::delete_tag_handler,

        // Ingredients
        crate::ingredient::adapter::incoming::web::routes::list_ingredients_handler,
        crate::ingredient::adapter::incoming::web::routes::get_ingredient_handler,
        crate::ingredient::adapter::incoming::web::routes::create_ingredient_handler,
        crate::ingredient::adapter::incoming::web::routes::patch_ingredient_handler,
        crate::ingredient::adapter::incoming::web::routes::put_ingredient_handler,
        crate::ingredient::adapter::incoming::web::routes::delete_ingredient_handler,

        // Recipes
        crate::recipe::adapter::incoming::web::routes::list_recipes_handler,
        crate::recipe::adapter::incoming::web::routes::get_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::create_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::patch_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::put_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::delete_recipe_handler,
        crate::recipe::adapter::incoming::web::routes::upload_image_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            CreateUserRequest,
            CreatedUserResponse,
            CreateTokenRequest,
            TokenResponse,
            UserProfileResponse,
            PatchProfileRequest,
            PutProfileRequest,

            TagRequest,
            PatchTagRequest,
            TagResponse,

            IngredientRequest,
            PatchIngredientRequest,
            IngredientResponse,

            RecipeRequest,
            PatchRecipeRequest,
            RecipeResponse,
            RecipeDetailResponse,
            NamedItemResponse,
            RecipeImageResponse,
            UploadImageForm
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "Accounts and tokens"),
        (name = "recipe", description = "Tags, ingredients and recipes owned by the caller"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /user/token"))
                        .build(),
                ),
            )
        }
    }
}
