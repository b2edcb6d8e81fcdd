use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    CreateTokenCommand, CreateTokenError, CreateTokenUseCase, CreateUserCommand, CreateUserError,
    CreateUserUseCase, DeleteUserError, DeleteUserUseCase, FetchProfileError,
    FetchProfileUseCase, IssuedToken, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase, UserProfile,
};
use crate::auth::application::ports::outgoing::UserResult;

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTokenUseCase;

#[async_trait]
impl CreateTokenUseCase for StubCreateTokenUseCase {
    async fn execute(&self, _command: CreateTokenCommand) -> Result<IssuedToken, CreateTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::UserNotFound)
    }
}
