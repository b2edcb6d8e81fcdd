use std::sync::Arc;

use crate::tag::application::ports::incoming::use_cases::{
    CreateTagUseCase, DeleteTagUseCase, GetTagUseCase, ListTagsUseCase, UpdateTagUseCase,
};

#[derive(Clone)]
pub struct TagUseCases {
    pub list: Arc<dyn ListTagsUseCase + Send + Sync>,
    pub get: Arc<dyn GetTagUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTagUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTagUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTagUseCase + Send + Sync>,
}

#[cfg(test)]
impl TagUseCases {
    /// Real services over the in-memory store, for route tests.
    pub fn in_memory(store: crate::tag::application::services::in_memory::InMemoryTags) -> Self {
        use crate::tag::application::services::{
            CreateTagService, DeleteTagService, GetTagService, ListTagsService, UpdateTagService,
        };

        Self {
            list: Arc::new(ListTagsService::new(store.clone())),
            get: Arc::new(GetTagService::new(store.clone())),
            create: Arc::new(CreateTagService::new(store.clone())),
            update: Arc::new(UpdateTagService::new(store.clone())),
            delete: Arc::new(DeleteTagService::new(store)),
        }
    }
}
