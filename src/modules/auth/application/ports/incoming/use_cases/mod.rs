mod authenticate;
mod create_token;
mod create_user;
mod delete_user;
mod fetch_profile;
mod update_profile;

pub use authenticate::{AuthenticateError, AuthenticateUseCase};
pub use create_token::{
    CreateTokenCommand, CreateTokenCommandError, CreateTokenError, CreateTokenUseCase, IssuedToken,
};
pub use create_user::{
    CreateSuperuserUseCase, CreateUserCommand, CreateUserCommandError, CreateUserError,
    CreateUserUseCase,
};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase, UserProfile};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};

pub(crate) const MAX_NAME_LENGTH: usize = 255;
