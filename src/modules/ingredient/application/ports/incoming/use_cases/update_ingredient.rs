use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::{
        domain::entities::{IngredientName, IngredientNameError},
        ports::outgoing::IngredientRecord,
    },
};

/// `name: None` is a PATCH that leaves the name alone.
#[derive(Debug, Clone)]
pub struct UpdateIngredientCommand {
    owner: UserId,
    ingredient_id: i32,
    name: Option<IngredientName>,
}

impl UpdateIngredientCommand {
    pub fn new(
        owner: UserId,
        ingredient_id: i32,
        name: Option<&str>,
    ) -> Result<Self, IngredientNameError> {
        Ok(Self {
            owner,
            ingredient_id,
            name: name.map(IngredientName::parse).transpose()?,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn ingredient_id(&self) -> i32 {
        self.ingredient_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(IngredientName::as_str)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateIngredientError {
    #[error("Ingredient not found")]
    IngredientNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateIngredientUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateIngredientCommand,
    ) -> Result<IngredientRecord, UpdateIngredientError>;
}
