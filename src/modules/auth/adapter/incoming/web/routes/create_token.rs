use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    CreateTokenCommand, CreateTokenCommandError, CreateTokenError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTokenRequest {
    #[schema(example = "test@example.com")]
    pub email: String,

    #[schema(example = "testpass123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

fn map_command_error(err: CreateTokenCommandError) -> HttpResponse {
    let field = match err {
        CreateTokenCommandError::EmptyEmail => "email",
        CreateTokenCommandError::EmptyPassword => "password",
    };
    ApiResponse::validation_error("BLANK_FIELD", field, &err.to_string())
}

fn map_create_token_error(err: CreateTokenError) -> HttpResponse {
    match err {
        CreateTokenError::InvalidCredentials => {
            warn!("Token request with invalid credentials");
            ApiResponse::bad_request(
                "INVALID_CREDENTIALS",
                "Unable to authenticate with provided credentials",
            )
        }

        other => {
            error!(error = %other, "Token issuing failed");
            ApiResponse::internal_error()
        }
    }
}

/// Exchange email and password for a bearer token
#[utoipa::path(
    post,
    path = "/user/token",
    tag = "user",
    request_body = CreateTokenRequest,
    responses(
        (status = 200, description = "Token issued", body = inline(SuccessResponse<TokenResponse>)),
        (status = 400, description = "Blank field or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/user/token")]
pub async fn create_token_handler(
    req: web::Json<CreateTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateTokenCommand::new(&req.email, req.password) {
        Ok(c) => c,
        Err(e) => return map_command_error(e),
    };

    match data.users.token.execute(command).await {
        Ok(issued) => ApiResponse::success(TokenResponse {
            token: issued.token,
        }),
        Err(e) => map_create_token_error(e),
    }
}
