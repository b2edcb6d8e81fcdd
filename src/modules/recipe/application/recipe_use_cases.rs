use std::sync::Arc;

use crate::recipe::application::ports::incoming::use_cases::{
    CreateRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase, ListRecipesUseCase,
    UpdateRecipeUseCase, UploadImageUseCase,
};

#[derive(Clone)]
pub struct RecipeUseCases {
    pub list: Arc<dyn ListRecipesUseCase + Send + Sync>,
    pub get: Arc<dyn GetRecipeUseCase + Send + Sync>,
    pub create: Arc<dyn CreateRecipeUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateRecipeUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteRecipeUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadImageUseCase + Send + Sync>,
}

#[cfg(test)]
impl RecipeUseCases {
    /// Real services over the in-memory stores, for route tests.
    pub fn in_memory(
        store: crate::recipe::application::services::in_memory::InMemoryRecipes,
        images: crate::recipe::application::services::in_memory::InMemoryImages,
    ) -> Self {
        use crate::recipe::application::{
            domain::policies::ImagePolicy,
            ports::outgoing::ImageStorage,
            services::{
                CreateRecipeService, DeleteRecipeService, GetRecipeService, ListRecipesService,
                UpdateRecipeService, UploadImageService,
            },
        };

        let storage: Arc<dyn ImageStorage + Send + Sync> = Arc::new(images);

        Self {
            list: Arc::new(ListRecipesService::new(store.clone())),
            get: Arc::new(GetRecipeService::new(store.clone(), storage.clone())),
            create: Arc::new(CreateRecipeService::new(store.clone())),
            update: Arc::new(UpdateRecipeService::new(store.clone())),
            delete: Arc::new(DeleteRecipeService::new(store.clone(), storage.clone())),
            upload_image: Arc::new(UploadImageService::new(
                store,
                storage,
                ImagePolicy::default(),
            )),
        }
    }
}
