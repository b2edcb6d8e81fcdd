use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    tag::application::{
        domain::entities::{TagName, TagNameError},
        ports::outgoing::TagRecord,
    },
};

/// `name: None` is a PATCH that leaves the name alone.
#[derive(Debug, Clone)]
pub struct UpdateTagCommand {
    owner: UserId,
    tag_id: i32,
    name: Option<TagName>,
}

impl UpdateTagCommand {
    pub fn new(owner: UserId, tag_id: i32, name: Option<&str>) -> Result<Self, TagNameError> {
        Ok(Self {
            owner,
            tag_id,
            name: name.map(TagName::parse).transpose()?,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn tag_id(&self) -> i32 {
        self.tag_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(TagName::as_str)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTagError {
    #[error("Tag not found")]
    TagNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTagUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTagCommand) -> Result<TagRecord, UpdateTagError>;
}
