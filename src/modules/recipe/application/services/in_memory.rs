use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    recipe::application::{
        domain::entities::RecipeFilter,
        ports::outgoing::{
            ImageStorage, ImageStorageError, NamedItem, NewRecipe, RecipeChanges, RecipeDetail,
            RecipeQuery, RecipeQueryError, RecipeRepository, RecipeRepositoryError,
            RecipeSummary,
        },
    },
    shared::PatchField,
};

#[derive(Debug, Clone)]
struct Row {
    owner: UserId,
    recipe: RecipeDetail,
}

#[derive(Default)]
struct State {
    recipes: BTreeMap<i32, Row>,
    tags: HashMap<i32, String>,
    ingredients: HashMap<i32, String>,
    next_id: i32,
}

/// Shared fake for the recipe service and route tests. Clones see the same rows.
#[derive(Clone, Default)]
pub struct InMemoryRecipes {
    state: Arc<Mutex<State>>,
    broken: bool,
}

impl InMemoryRecipes {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    /// Makes a tag id known so recipes may link to it.
    pub fn with_tag(self, id: i32, name: &str) -> Self {
        self.state.lock().unwrap().tags.insert(id, name.to_string());
        self
    }

    pub fn with_ingredient(self, id: i32, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .ingredients
            .insert(id, name.to_string());
        self
    }

    pub fn seed(&self, owner: UserId, title: &str) -> i32 {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.recipes.insert(
            id,
            Row {
                owner,
                recipe: RecipeDetail {
                    id,
                    title: title.to_string(),
                    time_minutes: 22,
                    price: rust_decimal::Decimal::new(525, 2),
                    link: None,
                    image: None,
                    tags: Vec::new(),
                    ingredients: Vec::new(),
                },
            },
        );
        id
    }

    pub fn link_tag(&self, recipe_id: i32, tag_id: i32) {
        let mut state = self.state.lock().unwrap();
        let name = state.tags.get(&tag_id).cloned().unwrap_or_default();
        if let Some(row) = state.recipes.get_mut(&recipe_id) {
            row.recipe.tags.push(NamedItem { id: tag_id, name });
        }
    }

    pub fn link_ingredient(&self, recipe_id: i32, ingredient_id: i32) {
        let mut state = self.state.lock().unwrap();
        let name = state
            .ingredients
            .get(&ingredient_id)
            .cloned()
            .unwrap_or_default();
        if let Some(row) = state.recipes.get_mut(&recipe_id) {
            row.recipe.ingredients.push(NamedItem {
                id: ingredient_id,
                name,
            });
        }
    }

    pub fn set_image(&self, recipe_id: i32, key: &str) {
        if let Some(row) = self.state.lock().unwrap().recipes.get_mut(&recipe_id) {
            row.recipe.image = Some(key.to_string());
        }
    }

    pub fn get(&self, recipe_id: i32) -> Option<RecipeDetail> {
        self.state
            .lock()
            .unwrap()
            .recipes
            .get(&recipe_id)
            .map(|r| r.recipe.clone())
    }

    fn summary(detail: &RecipeDetail) -> RecipeSummary {
        RecipeSummary {
            id: detail.id,
            title: detail.title.clone(),
            time_minutes: detail.time_minutes,
            price: detail.price,
            link: detail.link.clone(),
            tags: detail.tags.iter().map(|t| t.id).collect(),
            ingredients: detail.ingredients.iter().map(|i| i.id).collect(),
        }
    }

    fn resolve(
        known: &HashMap<i32, String>,
        ids: &[i32],
        unknown: fn(i32) -> RecipeRepositoryError,
    ) -> Result<Vec<NamedItem>, RecipeRepositoryError> {
        ids.iter()
            .map(|id| {
                known
                    .get(id)
                    .map(|name| NamedItem {
                        id: *id,
                        name: name.clone(),
                    })
                    .ok_or(unknown(*id))
            })
            .collect()
    }

    fn check(&self) -> Result<(), RecipeRepositoryError> {
        if self.broken {
            return Err(RecipeRepositoryError::DatabaseError("db down".into()));
        }
        Ok(())
    }
}

fn matches_any(items: &[NamedItem], ids: &[i32]) -> bool {
    ids.is_empty() || items.iter().any(|i| ids.contains(&i.id))
}

#[async_trait]
impl RecipeQuery for InMemoryRecipes {
    async fn list(
        &self,
        owner: UserId,
        filter: &RecipeFilter,
    ) -> Result<Vec<RecipeSummary>, RecipeQueryError> {
        if self.broken {
            return Err(RecipeQueryError::DatabaseError("db down".into()));
        }

        Ok(self
            .state
            .lock()
            .unwrap()
            .recipes
            .values()
            .rev()
            .filter(|r| r.owner == owner)
            .filter(|r| matches_any(&r.recipe.tags, &filter.tag_ids))
            .filter(|r| matches_any(&r.recipe.ingredients, &filter.ingredient_ids))
            .map(|r| Self::summary(&r.recipe))
            .collect())
    }

    async fn find_detail(
        &self,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<Option<RecipeDetail>, RecipeQueryError> {
        if self.broken {
            return Err(RecipeQueryError::DatabaseError("db down".into()));
        }

        Ok(self
            .state
            .lock()
            .unwrap()
            .recipes
            .get(&recipe_id)
            .filter(|r| r.owner == owner)
            .map(|r| r.recipe.clone()))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipes {
    async fn create_recipe(&self, data: NewRecipe) -> Result<RecipeSummary, RecipeRepositoryError> {
        self.check()?;

        let mut state = self.state.lock().unwrap();
        let tags = Self::resolve(&state.tags, &data.tag_ids, RecipeRepositoryError::UnknownTag)?;
        let ingredients = Self::resolve(
            &state.ingredients,
            &data.ingredient_ids,
            RecipeRepositoryError::UnknownIngredient,
        )?;

        state.next_id += 1;
        let id = state.next_id;
        let recipe = RecipeDetail {
            id,
            title: data.title,
            time_minutes: data.time_minutes,
            price: data.price,
            link: data.link,
            image: None,
            tags,
            ingredients,
        };
        let summary = Self::summary(&recipe);
        state.recipes.insert(
            id,
            Row {
                owner: data.owner,
                recipe,
            },
        );

        Ok(summary)
    }

    async fn update_recipe(
        &self,
        owner: UserId,
        recipe_id: i32,
        changes: RecipeChanges,
    ) -> Result<RecipeSummary, RecipeRepositoryError> {
        self.check()?;

        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        let tags = changes
            .tag_ids
            .as_deref()
            .map(|ids| Self::resolve(&state.tags, ids, RecipeRepositoryError::UnknownTag))
            .transpose()?;
        let ingredients = changes
            .ingredient_ids
            .as_deref()
            .map(|ids| {
                Self::resolve(
                    &state.ingredients,
                    ids,
                    RecipeRepositoryError::UnknownIngredient,
                )
            })
            .transpose()?;

        let row = state
            .recipes
            .get_mut(&recipe_id)
            .filter(|r| r.owner == owner)
            .ok_or(RecipeRepositoryError::RecipeNotFound)?;
        let recipe = &mut row.recipe;

        if let Some(title) = changes.title {
            recipe.title = title;
        }
        if let Some(time_minutes) = changes.time_minutes {
            recipe.time_minutes = time_minutes;
        }
        if let Some(price) = changes.price {
            recipe.price = price;
        }
        match changes.link {
            PatchField::Unset => {}
            PatchField::Null => recipe.link = None,
            PatchField::Value(link) => recipe.link = Some(link),
        }
        if let Some(tags) = tags {
            recipe.tags = tags;
        }
        if let Some(ingredients) = ingredients {
            recipe.ingredients = ingredients;
        }

        Ok(Self::summary(recipe))
    }

    async fn delete_recipe(
        &self,
        owner: UserId,
        recipe_id: i32,
    ) -> Result<Option<String>, RecipeRepositoryError> {
        self.check()?;

        let mut state = self.state.lock().unwrap();
        match state.recipes.get(&recipe_id) {
            Some(row) if row.owner == owner => {}
            _ => return Err(RecipeRepositoryError::RecipeNotFound),
        }

        Ok(state
            .recipes
            .remove(&recipe_id)
            .and_then(|row| row.recipe.image))
    }

    async fn replace_image(
        &self,
        owner: UserId,
        recipe_id: i32,
        image_key: String,
    ) -> Result<Option<String>, RecipeRepositoryError> {
        self.check()?;

        let mut state = self.state.lock().unwrap();
        let row = state
            .recipes
            .get_mut(&recipe_id)
            .filter(|r| r.owner == owner)
            .ok_or(RecipeRepositoryError::RecipeNotFound)?;

        Ok(row.recipe.image.replace(image_key))
    }
}

/// Image storage kept in a map; URLs are `/media/<key>`.
#[derive(Clone, Default)]
pub struct InMemoryImages {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryImages {
    pub fn contains(&self, key: &str) -> bool {
        self.files.lock().unwrap().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn put(&self, key: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), Vec::new());
    }
}

#[async_trait]
impl ImageStorage for InMemoryImages {
    async fn store(&self, key: String, bytes: Vec<u8>) -> Result<(), ImageStorageError> {
        self.files.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    async fn remove(&self, key: String) -> Result<(), ImageStorageError> {
        self.files.lock().unwrap().remove(&key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("/media/{key}")
    }
}
