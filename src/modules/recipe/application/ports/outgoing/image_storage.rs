use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageStorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Where uploaded recipe images live. Keys are relative paths such as
/// `uploads/recipe/<uuid>.jpg`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn store(&self, key: String, bytes: Vec<u8>) -> Result<(), ImageStorageError>;

    /// Removing a key that is already gone is not an error.
    async fn remove(&self, key: String) -> Result<(), ImageStorageError>;

    fn public_url(&self, key: &str) -> String;
}
