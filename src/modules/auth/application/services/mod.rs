mod authenticate_service;
mod create_token_service;
mod create_user_service;
mod delete_user_service;
mod fetch_profile_service;
pub mod password;
mod update_profile_service;

pub use authenticate_service::AuthenticateService;
pub use create_token_service::CreateTokenService;
pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use fetch_profile_service::FetchProfileService;
pub use update_profile_service::UpdateProfileService;
