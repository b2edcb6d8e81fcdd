use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    ingredient::application::ports::outgoing::{
        CreateIngredientData, IngredientQuery, IngredientQueryError, IngredientRecord,
        IngredientRepository, IngredientRepositoryError,
    },
};

#[derive(Debug, Clone)]
struct Row {
    id: i32,
    owner: UserId,
    name: String,
    assigned: bool,
}

/// Shared fake for the ingredient service tests. Clones see the same rows.
#[derive(Clone, Default)]
pub struct InMemoryIngredients {
    rows: Arc<Mutex<Vec<Row>>>,
    broken: bool,
}

impl InMemoryIngredients {
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

    fn record(row: &Row) -> IngredientRecord {
        IngredientRecord {
            id: row.id,
            name: row.name.clone(),
        }
    }
}

#[async_trait]
impl IngredientQuery for InMemoryIngredients {
    async fn list(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<IngredientRecord>, IngredientQueryError> {
        if self.broken {
            return Err(IngredientQueryError::DatabaseError("db down".into()));
        }

        let mut rows: Vec<IngredientRecord> = self
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

    async fn find(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<Option<IngredientRecord>, IngredientQueryError> {
        if self.broken {
            return Err(IngredientQueryError::DatabaseError("db down".into()));
        }

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.owner == owner && r.id == ingredient_id)
            .map(Self::record))
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredients {
    async fn create_ingredient(
        &self,
        data: CreateIngredientData,
    ) -> Result<IngredientRecord, IngredientRepositoryError> {
        if self.broken {
            return Err(IngredientRepositoryError::DatabaseError("db down".into()));
        }

        let id = self.seed(data.owner, &data.name, false);
        Ok(IngredientRecord {
            id,
            name: data.name,
        })
    }

    async fn update_ingredient(
        &self,
        owner: UserId,
        ingredient_id: i32,
        name: Option<String>,
    ) -> Result<IngredientRecord, IngredientRepositoryError> {
        if self.broken {
            return Err(IngredientRepositoryError::DatabaseError("db down".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.owner == owner && r.id == ingredient_id)
            .ok_or(IngredientRepositoryError::IngredientNotFound)?;

        if let Some(name) = name {
            row.name = name;
        }

        Ok(Self::record(row))
    }

    async fn delete_ingredient(
        &self,
        owner: UserId,
        ingredient_id: i32,
    ) -> Result<(), IngredientRepositoryError> {
        if self.broken {
            return Err(IngredientRepositoryError::DatabaseError("db down".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.owner == owner && r.id == ingredient_id));

        if rows.len() == before {
            return Err(IngredientRepositoryError::IngredientNotFound);
        }
        Ok(())
    }
}
