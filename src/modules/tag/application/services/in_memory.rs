use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    tag::application::ports::outgoing::{
        CreateTagData, TagQuery, TagQueryError, TagRecord, TagRepository, TagRepositoryError,
    },
};

#[derive(Debug, Clone)]
struct Row {
    id: i32,
    owner: UserId,
    name: String,
    assigned: bool,
}

/// Shared fake for the tag service tests. Clones see the same rows.
#[derive(Clone, Default)]
pub struct InMemoryTags {
    rows: Arc<Mutex<Vec<Row>>>,
    broken: bool,
}

impl InMemoryTags {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn seed(&self, owner: UserId, name: &str, assigned: bool) -> i32 {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(Row {
            id,
            owner,
            name: name.to_string(),
            assigned,
        });
        id
    }

    pub fn name_of(&self, id: i32) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.clone())
    }

    fn record(row: &Row) -> TagRecord {
        TagRecord {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

#[async_trait]
impl TagQuery for InMemoryTags {
    async fn list(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<TagRecord>, TagQueryError> {
        if self.broken {
            return Err(TagQueryError::DatabaseError("db down".into()));
        }

        let mut rows: Vec<TagRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.owner == owner && (!assigned_only || r.assigned))
            .map(Self::record)
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn find(&self, owner: UserId, tag_id: i32) -> Result<Option<TagRecord>, TagQueryError> {
        if self.broken {
            return Err(TagQueryError::DatabaseError("db down".into()));
        }

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.owner == owner && r.id == tag_id)
            .map(Self::record))
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn create_tag(&self, data: CreateTagData) -> Result<TagRecord, TagRepositoryError> {
        if self.broken {
            return Err(TagRepositoryError::DatabaseError("db down".into()));
        }

        let id = self.seed(data.owner, &data.name, false);
        Ok(TagRecord {
            id,
            name: data.name,
        })
    }

    async fn update_tag(
        &self,
        owner: UserId,
        tag_id: i32,
        name: Option<String>,
    ) -> Result<TagRecord, TagRepositoryError> {
        if self.broken {
            return Err(TagRepositoryError::DatabaseError("db down".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.owner == owner && r.id == tag_id)
            .ok_or(TagRepositoryError::TagNotFound)?;

        if let Some(name) = name {
            row.name = name;
        }

        Ok(Self::record(row))
    }

    async fn delete_tag(&self, owner: UserId, tag_id: i32) -> Result<(), TagRepositoryError> {
        if self.broken {
            return Err(TagRepositoryError::DatabaseError("db down".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.owner == owner && r.id == tag_id));

        if rows.len() == before {
            return Err(TagRepositoryError::TagNotFound);
        }
        Ok(())
    }
}
