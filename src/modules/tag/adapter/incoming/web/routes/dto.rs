use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::tag::application::{domain::entities::TagNameError, ports::outgoing::TagRecord};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

impl From<TagRecord> for TagResponse {
    fn from(tag: TagRecord) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// Body for POST and PUT.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagRequest {
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PatchTagRequest {
    pub name: Option<String>,
}

pub(super) fn name_error(e: &TagNameError) -> HttpResponse {
    ApiResponse::validation_error("INVALID_NAME", "name", &e.to_string())
}

pub(super) fn tag_not_found() -> HttpResponse {
    ApiResponse::not_found("TAG_NOT_FOUND", "Tag not found")
}
