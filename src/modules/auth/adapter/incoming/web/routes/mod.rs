mod create_token;
mod create_user;
mod delete_user;
mod fetch_user;
mod field_errors;
mod update_profile;

pub use create_token::{create_token_handler, CreateTokenRequest, TokenResponse};
pub use create_user::{create_user_handler, CreateUserRequest, CreatedUserResponse};
pub use delete_user::delete_user_handler;
pub use fetch_user::{fetch_user_handler, UserProfileResponse};
pub use update_profile::{
    patch_profile_handler, put_profile_handler, PatchProfileRequest, PutProfileRequest,
};

pub use create_token::__path_create_token_handler;
pub use create_user::__path_create_user_handler;
pub use delete_user::__path_delete_user_handler;
pub use fetch_user::__path_fetch_user_handler;
pub use update_profile::__path_patch_profile_handler;
pub use update_profile::__path_put_profile_handler;
