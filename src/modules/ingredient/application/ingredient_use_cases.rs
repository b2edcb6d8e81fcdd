use std::sync::Arc;

use crate::ingredient::application::ports::incoming::use_cases::{
    CreateIngredientUseCase, DeleteIngredientUseCase, GetIngredientUseCase, ListIngredientsUseCase,
    UpdateIngredientUseCase,
};

#[derive(Clone)]
pub struct IngredientUseCases {
    pub list: Arc<dyn ListIngredientsUseCase + Send + Sync>,
    pub get: Arc<dyn GetIngredientUseCase + Send + Sync>,
    pub create: Arc<dyn CreateIngredientUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateIngredientUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteIngredientUseCase + Send + Sync>,
}

#[cfg(test)]
impl IngredientUseCases {
    /// Real services over the in-memory store, for route tests.
    pub fn in_memory(
        store: crate::ingredient::application::services::in_memory::InMemoryIngredients,
    ) -> Self {
        use crate::ingredient::application::services::{
            CreateIngredientService, DeleteIngredientService, GetIngredientService,
            ListIngredientsService, UpdateIngredientService,
        };

        Self {
            list: Arc::new(ListIngredientsService::new(store.clone())),
            get: Arc::new(GetIngredientService::new(store.clone())),
            create: Arc::new(CreateIngredientService::new(store.clone())),
            update: Arc::new(UpdateIngredientService::new(store.clone())),
            delete: Arc::new(DeleteIngredientService::new(store)),
        }
    }
}
