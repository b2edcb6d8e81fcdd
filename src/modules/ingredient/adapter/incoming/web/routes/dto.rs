use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::ingredient::application::{
    domain::entities::IngredientNameError, ports::outgoing::IngredientRecord,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
}

impl From<IngredientRecord> for IngredientResponse {
    fn from(ingredient: IngredientRecord) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

/// Body for POST and PUT.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngredientRequest {
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PatchIngredientRequest {
    pub name: Option<String>,
}

pub(super) fn name_error(e: &IngredientNameError) -> HttpResponse {
    ApiResponse::validation_error("INVALID_NAME", "name", &e.to_string())
}

pub(super) fn ingredient_not_found() -> HttpResponse {
    ApiResponse::not_found("INGREDIENT_NOT_FOUND", "Ingredient not found")
}
