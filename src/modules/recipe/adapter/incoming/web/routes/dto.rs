use actix_web::HttpResponse;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::recipe::application::ports::{
    incoming::use_cases::{RecipeFieldError, RecipeFields, RecipeImageView, RecipePatch},
    outgoing::{NamedItem, RecipeDetail, RecipeSummary},
};
use crate::shared::api::ApiResponse;
use crate::shared::PatchField;

//
// ──────────────────────────────────────────────────────────
// Responses
// ──────────────────────────────────────────────────────────
//

/// List, create and update shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.25")]
    pub price: Decimal,
    pub link: Option<String>,
    pub tags: Vec<i32>,
    pub ingredients: Vec<i32>,
}

impl From<RecipeSummary> for RecipeResponse {
    fn from(r: RecipeSummary) -> Self {
        Self {
            id: r.id,
            title: r.title,
            time_minutes: r.time_minutes,
            price: r.price,
            link: r.link,
            tags: r.tags,
            ingredients: r.ingredients,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NamedItemResponse {
    pub id: i32,
    pub name: String,
}

impl From<NamedItem> for NamedItemResponse {
    fn from(item: NamedItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetailResponse {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.25")]
    pub price: Decimal,
    pub link: Option<String>,
    /// Public URL of the uploaded image
    pub image: Option<String>,
    pub tags: Vec<NamedItemResponse>,
    pub ingredients: Vec<NamedItemResponse>,
}

impl From<RecipeDetail> for RecipeDetailResponse {
    fn from(r: RecipeDetail) -> Self {
        Self {
            id: r.id,
            title: r.title,
            time_minutes: r.time_minutes,
            price: r.price,
            link: r.link,
            image: r.image,
            tags: r.tags.into_iter().map(Into::into).collect(),
            ingredients: r.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeImageResponse {
    pub id: i32,
    pub image: String,
}

impl From<RecipeImageView> for RecipeImageResponse {
    fn from(v: RecipeImageView) -> Self {
        Self {
            id: v.id,
            image: v.image,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Requests
// ──────────────────────────────────────────────────────────
//

/// Body for POST and PUT. Omitted `tags` / `ingredients` mean none.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeRequest {
    pub title: String,
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.25")]
    pub price: Decimal,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<i32>,
    #[serde(default)]
    pub ingredients: Vec<i32>,
}

impl From<RecipeRequest> for RecipeFields {
    fn from(req: RecipeRequest) -> Self {
        Self {
            title: req.title,
            time_minutes: req.time_minutes,
            price: req.price,
            link: req.link,
            tags: req.tags,
            ingredients: req.ingredients,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PatchRecipeRequest {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    #[schema(value_type = Option<String>, example = "5.25")]
    pub price: Option<Decimal>,
    /// `null` removes the link
    #[schema(value_type = Option<String>, nullable)]
    pub link: PatchField<String>,
    pub tags: Option<Vec<i32>>,
    pub ingredients: Option<Vec<i32>>,
}

impl From<PatchRecipeRequest> for RecipePatch {
    fn from(req: PatchRecipeRequest) -> Self {
        Self {
            title: req.title,
            time_minutes: req.time_minutes,
            price: req.price,
            link: req.link,
            tags: req.tags,
            ingredients: req.ingredients,
        }
    }
}

/// Multipart form for the image upload.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

//
// ──────────────────────────────────────────────────────────
// Error responses
// ──────────────────────────────────────────────────────────
//

pub(super) fn field_error(e: &RecipeFieldError) -> HttpResponse {
    ApiResponse::validation_error("INVALID_RECIPE", e.field(), &e.to_string())
}

pub(super) fn recipe_not_found() -> HttpResponse {
    ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
}

pub(super) fn unknown_tag(id: i32) -> HttpResponse {
    ApiResponse::validation_error("UNKNOWN_TAG", "tags", &format!("Tag {id} does not exist"))
}

pub(super) fn unknown_ingredient(id: i32) -> HttpResponse {
    ApiResponse::validation_error(
        "UNKNOWN_INGREDIENT",
        "ingredients",
        &format!("Ingredient {id} does not exist"),
    )
}
