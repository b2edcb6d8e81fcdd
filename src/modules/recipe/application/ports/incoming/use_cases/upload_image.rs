use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::policies::ImageRejection;

#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub owner: UserId,
    pub recipe_id: i32,
    /// Client-side file name, used only for its extension.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeImageView {
    pub id: i32,
    pub image: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadImageError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error(transparent)]
    InvalidImage(#[from] ImageRejection),

    #[error("Storage error: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, command: UploadImageCommand)
        -> Result<RecipeImageView, UploadImageError>;
}
