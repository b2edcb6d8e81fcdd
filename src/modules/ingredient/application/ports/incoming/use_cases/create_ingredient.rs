use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::{
        domain::entities::{IngredientName, IngredientNameError},
        ports::outgoing::IngredientRecord,
    },
};

//
// ──────────────────────────────────────────────────────────
// Create Ingredient Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateIngredientCommand {
    owner: UserId,
    name: IngredientName,
}

impl CreateIngredientCommand {
    pub fn new(owner: UserId, name: &str) -> Result<Self, IngredientNameError> {
        Ok(Self {
            owner,
            name: IngredientName::parse(name)?,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateIngredientError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateIngredientUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateIngredientCommand,
    ) -> Result<IngredientRecord, CreateIngredientError>;
}
