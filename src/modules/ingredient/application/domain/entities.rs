pub const MAX_INGREDIENT_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientNameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be at most {0} characters")]
    TooLong(usize),
}

/// Trimmed, non-blank ingredient name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientName(String);

impl IngredientName {
    pub fn parse(raw: &str) -> Result<Self, IngredientNameError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(IngredientNameError::Empty);
        }

        if name.chars().count() > MAX_INGREDIENT_NAME_LENGTH {
            return Err(IngredientNameError::TooLong(MAX_INGREDIENT_NAME_LENGTH));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
