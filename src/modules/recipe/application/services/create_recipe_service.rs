use async_trait::async_trait;
use tracing::info;

use crate::recipe::application::ports::{
    incoming::use_cases::{CreateRecipeCommand, CreateRecipeError, CreateRecipeUseCase},
    outgoing::{RecipeRepository, RecipeRepositoryError, RecipeSummary},
};

#[derive(Debug, Clone)]
pub struct CreateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRecipeUseCase for CreateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateRecipeCommand,
    ) -> Result<RecipeSummary, CreateRecipeError> {
        let owner = command.owner();

        let recipe = self
            .repository
            .create_recipe(command.into_recipe())
            .await
            .map_err(|e| match e {
                RecipeRepositoryError::UnknownTag(id) => CreateRecipeError::UnknownTag(id),
                RecipeRepositoryError::UnknownIngredient(id) => {
                    CreateRecipeError::UnknownIngredient(id)
                }
                other => CreateRecipeError::RepositoryError(other.to_string()),
            })?;

        info!(recipe_id = recipe.id, owner = %owner, "Recipe created");

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::recipe::application::ports::incoming::use_cases::RecipeFields;
    use crate::recipe::application::services::in_memory::InMemoryRecipes;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn command(owner: UserId, tags: Vec<i32>, ingredients: Vec<i32>) -> CreateRecipeCommand {
        CreateRecipeCommand::new(
            owner,
            RecipeFields {
                title: "Thai prawn curry".into(),
                time_minutes: 30,
                price: Decimal::new(250, 2),
                link: None,
                tags,
                ingredients,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn recipe_is_created_with_links() {
        // Arrange
        let me = UserId::from(Uuid::new_v4());
        let store = InMemoryRecipes::default()
            .with_tag(1, "Thai")
            .with_ingredient(2, "Prawns");

        // Act
        let recipe = CreateRecipeService::new(store.clone())
            .execute(command(me, vec![1], vec![2]))
            .await
            .unwrap();

        // Assert
        assert_eq!(recipe.tags, vec![1]);
        assert_eq!(recipe.ingredients, vec![2]);
        assert_eq!(store.get(recipe.id).unwrap().title, "Thai prawn curry");
    }

    #[tokio::test]
    async fn unknown_tag_is_reported() {
        let result = CreateRecipeService::new(InMemoryRecipes::default())
            .execute(command(UserId::from(Uuid::new_v4()), vec![9], vec![]))
            .await;

        assert!(matches!(result, Err(CreateRecipeError::UnknownTag(9))));
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let result = CreateRecipeService::new(InMemoryRecipes::broken())
            .execute(command(UserId::from(Uuid::new_v4()), vec![], vec![]))
            .await;

        assert!(matches!(result, Err(CreateRecipeError::RepositoryError(_))));
    }
}
