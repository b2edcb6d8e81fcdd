use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::recipe::application::ports::outgoing::{ImageStorage, ImageStorageError};

/// Writes images below `root` on the local filesystem. Files are served
/// back under `base_url`, e.g. `/media/uploads/recipe/<uuid>.jpg`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Only plain relative keys map to a path; anything that could
    /// escape `root` is refused.
    fn path_for(&self, key: &str) -> Result<PathBuf, ImageStorageError> {
        let relative = Path::new(key);

        let plain = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !plain {
            return Err(ImageStorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

fn io_err(e: std::io::Error) -> ImageStorageError {
    ImageStorageError::Io(e.to_string())
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, key: String, bytes: Vec<u8>) -> Result<(), ImageStorageError> {
        let path = self.path_for(&key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        tokio::fs::write(&path, bytes).await.map_err(io_err)?;
        debug!(path = %path.display(), "Image written");

        Ok(())
    }

    async fn remove(&self, key: String) -> Result<(), ImageStorageError> {
        let path = self.path_for(&key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(e)),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}
