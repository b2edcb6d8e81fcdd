use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CreateTokenUseCase, CreateUserUseCase, DeleteUserUseCase, FetchProfileUseCase,
    UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub token: Arc<dyn CreateTokenUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
