use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::{
    CreateTokenUseCase, CreateUserUseCase, DeleteUserUseCase, FetchProfileUseCase,
    UpdateProfileUseCase,
};
use crate::auth::application::user_use_cases::UserUseCases;
use crate::ingredient::application::ingredient_use_cases::IngredientUseCases;
use crate::ingredient::application::services::in_memory::InMemoryIngredients;
use crate::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::recipe::application::services::in_memory::{InMemoryImages, InMemoryRecipes};
use crate::tag::application::services::in_memory::InMemoryTags;
use crate::tag::application::tag_use_cases::TagUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    create_user: Option<Arc<dyn CreateUserUseCase + Send + Sync>>,
    create_token: Option<Arc<dyn CreateTokenUseCase + Send + Sync>>,
    fetch_profile: Option<Arc<dyn FetchProfileUseCase + Send + Sync>>,
    update_profile: Option<Arc<dyn UpdateProfileUseCase + Send + Sync>>,
    delete_user: Option<Arc<dyn DeleteUserUseCase + Send + Sync>>,
    tags: Option<TagUseCases>,
    ingredients: Option<IngredientUseCases>,
    recipes: Option<RecipeUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_user: Some(Arc::new(StubCreateUserUseCase)),
            create_token: Some(Arc::new(StubCreateTokenUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            delete_user: Some(Arc::new(StubDeleteUserUseCase)),
            tags: Some(TagUseCases::in_memory(InMemoryTags::default())),
            ingredients: Some(IngredientUseCases::in_memory(InMemoryIngredients::default())),
            recipes: Some(RecipeUseCases::in_memory(
                InMemoryRecipes::default(),
                InMemoryImages::default(),
            )),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Some(Arc::new(uc));
        self
    }

    pub fn with_create_token(
        mut self,
        uc: impl CreateTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_token = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.delete_user = Some(Arc::new(uc));
        self
    }

    pub fn with_tags(mut self, tags: TagUseCases) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_ingredients(mut self, ingredients: IngredientUseCases) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    pub fn with_recipes(mut self, recipes: RecipeUseCases) -> Self {
        self.recipes = Some(recipes);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            users: UserUseCases {
                create: self.create_user.expect("create_user not set"),
                token: self.create_token.expect("create_token not set"),
                fetch_profile: self.fetch_profile.expect("fetch_profile not set"),
                update_profile: self.update_profile.expect("update_profile not set"),
                delete: self.delete_user.expect("delete_user not set"),
            },
            tags: self.tags.expect("tags not set"),
            ingredients: self.ingredients.expect("ingredients not set"),
            recipes: self.recipes.expect("recipes not set"),
        })
    }
}
