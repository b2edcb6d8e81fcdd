use async_trait::async_trait;

use super::recipe_fields::{self, RecipeFieldError, RecipeFields, RecipePatch};
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::{RecipeChanges, RecipeSummary};
use crate::shared::PatchField;

//
// ──────────────────────────────────────────────────────────
// Update Recipe Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateRecipeCommand {
    owner: UserId,
    recipe_id: i32,
    changes: RecipeChanges,
}

impl UpdateRecipeCommand {
    /// PATCH: only what was sent changes.
    pub fn patch(
        owner: UserId,
        recipe_id: i32,
        patch: RecipePatch,
    ) -> Result<Self, RecipeFieldError> {
        let link = match patch.link {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(raw) => match recipe_fields::link(Some(raw))? {
                Some(link) => PatchField::Value(link),
                None => PatchField::Null,
            },
        };

        let changes = RecipeChanges {
            title: patch.title.as_deref().map(recipe_fields::title).transpose()?,
            time_minutes: patch.time_minutes.map(recipe_fields::time_minutes).transpose()?,
            price: patch.price.map(recipe_fields::price).transpose()?,
            link,
            tag_ids: patch.tags.map(recipe_fields::ids),
            ingredient_ids: patch.ingredients.map(recipe_fields::ids),
        };

        Ok(Self {
            owner,
            recipe_id,
            changes,
        })
    }

    /// PUT: every field is written. Missing link and link lists end up empty.
    pub fn replace(
        owner: UserId,
        recipe_id: i32,
        fields: RecipeFields,
    ) -> Result<Self, RecipeFieldError> {
        let link = match recipe_fields::link(fields.link)? {
            Some(link) => PatchField::Value(link),
            None => PatchField::Null,
        };

        let changes = RecipeChanges {
            title: Some(recipe_fields::title(&fields.title)?),
            time_minutes: Some(recipe_fields::time_minutes(fields.time_minutes)?),
            price: Some(recipe_fields::price(fields.price)?),
            link,
            tag_ids: Some(recipe_fields::ids(fields.tags)),
            ingredient_ids: Some(recipe_fields::ids(fields.ingredients)),
        };

        Ok(Self {
            owner,
            recipe_id,
            changes,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn recipe_id(&self) -> i32 {
        self.recipe_id
    }

    pub fn changes(&self) -> &RecipeChanges {
        &self.changes
    }

    pub fn into_changes(self) -> RecipeChanges {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRecipeError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Tag {0} does not exist")]
    UnknownTag(i32),

    #[error("Ingredient {0} does not exist")]
    UnknownIngredient(i32),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(&self, command: UpdateRecipeCommand)
        -> Result<RecipeSummary, UpdateRecipeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn owner() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[test]
    fn patch_without_tags_leaves_links_alone() {
        let command = UpdateRecipeCommand::patch(
            owner(),
            1,
            RecipePatch {
                title: Some("Chicken tikka".into()),
                ..RecipePatch::default()
            },
        )
        .unwrap();

        let changes = command.changes();
        assert_eq!(changes.title.as_deref(), Some("Chicken tikka"));
        assert!(changes.tag_ids.is_none());
        assert!(changes.ingredient_ids.is_none());
        assert!(changes.link.is_unset());
    }

    #[test]
    fn replace_without_tags_clears_links() {
        let command = UpdateRecipeCommand::replace(
            owner(),
            1,
            RecipeFields {
                title: "Spaghetti carbonara".into(),
                time_minutes: 25,
                price: Decimal::new(500, 2),
                ..RecipeFields::default()
            },
        )
        .unwrap();

        let changes = command.into_changes();
        assert_eq!(changes.tag_ids, Some(vec![]));
        assert_eq!(changes.ingredient_ids, Some(vec![]));
        assert!(changes.link.is_null());
    }

    #[test]
    fn patch_link_null_clears_it() {
        let command = UpdateRecipeCommand::patch(
            owner(),
            1,
            RecipePatch {
                link: PatchField::Null,
                ..RecipePatch::default()
            },
        )
        .unwrap();

        assert!(command.changes().link.is_null());
    }

    #[test]
    fn patch_validates_only_sent_fields() {
        let err = UpdateRecipeCommand::patch(
            owner(),
            1,
            RecipePatch {
                price: Some(Decimal::new(12345, 3)),
                ..RecipePatch::default()
            },
        )
        .unwrap_err();

        assert_eq!(err.field(), "price");
    }
}
