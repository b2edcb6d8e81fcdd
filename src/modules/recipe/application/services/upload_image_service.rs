use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::recipe::application::{
    domain::{entities::recipe_image_key, policies::ImagePolicy},
    ports::{
        incoming::use_cases::{
            RecipeImageView, UploadImageCommand, UploadImageError, UploadImageUseCase,
        },
        outgoing::{ImageStorage, RecipeRepository, RecipeRepositoryError},
    },
};

#[derive(Clone)]
pub struct UploadImageService<R>
where
    R: RecipeRepository + Send + Sync,
{
    repository: R,
    storage: Arc<dyn ImageStorage + Send + Sync>,
    policy: ImagePolicy,
}

impl<R> UploadImageService<R>
where
    R: RecipeRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        storage: Arc<dyn ImageStorage + Send + Sync>,
        policy: ImagePolicy,
    ) -> Self {
        Self {
            repository,
            storage,
            policy,
        }
    }

    async fn discard(&self, key: String) {
        if let Err(e) = self.storage.remove(key.clone()).await {
            warn!(key = %key, error = %e, "Failed to remove recipe image");
        }
    }
}

#[async_trait]
impl<R> UploadImageUseCase for UploadImageService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UploadImageCommand,
    ) -> Result<RecipeImageView, UploadImageError> {
        let UploadImageCommand {
            owner,
            recipe_id,
            file_name,
            bytes,
        } = command;

        let policy = self.policy.clone();
        let (format, bytes) =
            tokio::task::spawn_blocking(move || policy.inspect(&bytes).map(|f| (f, bytes)))
                .await
                .map_err(|e| UploadImageError::StorageFailed(e.to_string()))??;

        let extension = ImagePolicy::extension_for(file_name.as_deref(), format);
        let key = recipe_image_key(&extension);

        self.storage
            .store(key.clone(), bytes)
            .await
            .map_err(|e| UploadImageError::StorageFailed(e.to_string()))?;

        let previous = match self
            .repository
            .replace_image(owner, recipe_id, key.clone())
            .await
        {
            Ok(previous) => previous,
            Err(e) => {
                self.discard(key).await;
                return Err(match e {
                    RecipeRepositoryError::RecipeNotFound => UploadImageError::RecipeNotFound,
                    other => UploadImageError::RepositoryError(other.to_string()),
                });
            }
        };

        if let Some(previous) = previous {
            self.discard(previous).await;
        }

        info!(recipe_id, owner = %owner, key = %key, "Recipe image uploaded");

        Ok(RecipeImageView {
            id: recipe_id,
            image: self.storage.public_url(&key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::recipe::application::domain::policies::ImageRejection;
    use crate::recipe::application::services::in_memory::{InMemoryImages, InMemoryRecipes};
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;
    use uuid::Uuid;

    fn jpeg() -> Vec<u8> {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(10, 10);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();
        buf.into_inner()
    }

    fn command(owner: UserId, recipe_id: i32, bytes: Vec<u8>) -> UploadImageCommand {
        UploadImageCommand {
            owner,
            recipe_id,
            file_name: Some("photo.jpg".into()),
            bytes,
        }
    }

    fn service(
        store: &InMemoryRecipes,
        images: &InMemoryImages,
    ) -> UploadImageService<InMemoryRecipes> {
        UploadImageService::new(
            store.clone(),
            Arc::new(images.clone()),
            ImagePolicy::default(),
        )
    }

    #[tokio::test]
    async fn image_is_stored_under_fresh_key() {
        // Arrange
        let me = UserId::from(Uuid::new_v4());
        let store = InMemoryRecipes::default();
        let images = InMemoryImages::default();
        let id = store.seed(me, "Sample recipe");

        // Act
        let view = service(&store, &images)
            .execute(command(me, id, jpeg()))
            .await
            .unwrap();

        // Assert
        let key = store.get(id).unwrap().image.unwrap();
        assert!(key.starts_with("uploads/recipe/"));
        assert!(key.ends_with(".jpg"));
        assert!(images.contains(&key));
        assert_eq!(view.image, format!("/media/{key}"));
        assert_eq!(view.id, id);
    }

    #[tokio::test]
    async fn previous_image_is_replaced() {
        let me = UserId::from(Uuid::new_v4());
        let store = InMemoryRecipes::default();
        let images = InMemoryImages::default();
        let id = store.seed(me, "Sample recipe");
        store.set_image(id, "uploads/recipe/old.jpg");
        images.put("uploads/recipe/old.jpg");

        service(&store, &images)
            .execute(command(me, id, jpeg()))
            .await
            .unwrap();

        assert!(!images.contains("uploads/recipe/old.jpg"));
        assert_eq!(images.keys().len(), 1);
    }

    #[tokio::test]
    async fn non_image_is_rejected_and_nothing_is_stored() {
        let me = UserId::from(Uuid::new_v4());
        let store = InMemoryRecipes::default();
        let images = InMemoryImages::default();
        let id = store.seed(me, "Sample recipe");

        let result = service(&store, &images)
            .execute(command(me, id, b"notimage".to_vec()))
            .await;

        assert!(matches!(
            result,
            Err(UploadImageError::InvalidImage(ImageRejection::NotAnImage))
        ));
        assert!(images.keys().is_empty());
        assert!(store.get(id).unwrap().image.is_none());
    }

    #[tokio::test]
    async fn unknown_recipe_leaves_no_file_behind() {
        let store = InMemoryRecipes::default();
        let images = InMemoryImages::default();

        let result = service(&store, &images)
            .execute(command(UserId::from(Uuid::new_v4()), 99, jpeg()))
            .await;

        assert!(matches!(result, Err(UploadImageError::RecipeNotFound)));
        assert!(images.keys().is_empty());
    }
}
