use actix_web::HttpResponse;

use crate::auth::application::{
    domain::entities::EmailError,
    ports::incoming::{
        password_policy::PasswordPolicyError,
        use_cases::{CreateUserCommandError, UpdateProfileCommandError},
    },
};
use crate::shared::api::ApiResponse;

pub(super) fn email_error(err: &EmailError) -> HttpResponse {
    let code = match err {
        EmailError::Empty => "EMAIL_REQUIRED",
        EmailError::Invalid => "INVALID_EMAIL",
    };
    ApiResponse::validation_error(code, "email", &err.to_string())
}

pub(super) fn password_error(err: &PasswordPolicyError) -> HttpResponse {
    ApiResponse::validation_error("INVALID_PASSWORD", "password", &err.to_string())
}

pub(super) fn duplicate_email() -> HttpResponse {
    ApiResponse::validation_error(
        "USER_ALREADY_EXISTS",
        "email",
        "User with this email already exists",
    )
}

pub(super) fn create_command_error(err: &CreateUserCommandError) -> HttpResponse {
    match err {
        CreateUserCommandError::Email(e) => email_error(e),
        CreateUserCommandError::EmptyName | CreateUserCommandError::NameTooLong => {
            ApiResponse::validation_error("INVALID_NAME", "name", &err.to_string())
        }
    }
}

pub(super) fn update_command_error(err: &UpdateProfileCommandError) -> HttpResponse {
    match err {
        UpdateProfileCommandError::Email(e) => email_error(e),
        UpdateProfileCommandError::EmptyName | UpdateProfileCommandError::NameTooLong => {
            ApiResponse::validation_error("INVALID_NAME", "name", &err.to_string())
        }
    }
}
