use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    tag::application::{
        domain::entities::{TagName, TagNameError},
        ports::outgoing::TagRecord,
    },
};

//
// ──────────────────────────────────────────────────────────
// Create Tag Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    owner: UserId,
    name: TagName,
}

impl CreateTagCommand {
    pub fn new(owner: UserId, name: &str) -> Result<Self, TagNameError> {
        Ok(Self {
            owner,
            name: TagName::parse(name)?,
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
pub enum CreateTagError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTagUseCase: Send + Sync {
    async fn execute(&self, command: CreateTagCommand) -> Result<TagRecord, CreateTagError>;
}
