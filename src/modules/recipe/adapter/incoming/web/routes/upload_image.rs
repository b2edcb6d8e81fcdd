use actix_web::{http::header, post, web, HttpRequest, Responder};
use tracing::{debug, error};

use super::dto::{recipe_not_found, RecipeImageResponse, UploadImageForm};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::recipe::application::ports::incoming::use_cases::{
    UploadImageCommand, UploadImageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

const IMAGE_FIELD: &str = "image";

struct UploadedFile {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// Pulls the `image` part out of a buffered multipart body.
async fn read_image_field(
    req: &HttpRequest,
    body: web::Bytes,
) -> Result<Option<UploadedFile>, multer::Error> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let boundary = multer::parse_boundary(content_type)?;
    let stream = futures::stream::once(std::future::ready(Ok::<_, std::io::Error>(body)));
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Some(UploadedFile {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }

    Ok(None)
}

/// Upload or replace the recipe image
#[utoipa::path(
    post,
    path = "/recipe/recipes/{id}/upload-image",
    tag = "recipe",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Recipe id")),
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = inline(SuccessResponse<RecipeImageResponse>)),
        (status = 400, description = "Missing or invalid image", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign recipe", body = ErrorResponse),
    )
)]
#[post("/recipe/recipes/{id}/upload-image")]
pub async fn upload_image_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = match read_image_field(&req, body).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return ApiResponse::validation_error(
                "INVALID_IMAGE",
                IMAGE_FIELD,
                "No file was submitted.",
            )
        }
        Err(e) => {
            debug!(error = %e, "Unreadable multipart body");
            return ApiResponse::validation_error(
                "INVALID_IMAGE",
                IMAGE_FIELD,
                "The submitted data was not a file. Check the encoding type on the form.",
            );
        }
    };

    let command = UploadImageCommand {
        owner: user.user_id,
        recipe_id: path.into_inner(),
        file_name: file.file_name,
        bytes: file.bytes,
    };

    match data.recipes.upload_image.execute(command).await {
        Ok(view) => ApiResponse::success(RecipeImageResponse::from(view)),
        Err(UploadImageError::InvalidImage(e)) => {
            ApiResponse::validation_error("INVALID_IMAGE", IMAGE_FIELD, &e.to_string())
        }
        Err(UploadImageError::RecipeNotFound) => recipe_not_found(),
        Err(e) => {
            error!(error = %e, "Uploading recipe image failed");
            ApiResponse::internal_error()
        }
    }
}
