pub const MAX_TAG_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagNameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be at most {0} characters")]
    TooLong(usize),
}

/// Trimmed, non-blank tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    pub fn parse(raw: &str) -> Result<Self, TagNameError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(TagNameError::Empty);
        }

        if name.chars().count() > MAX_TAG_NAME_LENGTH {
            return Err(TagNameError::TooLong(MAX_TAG_NAME_LENGTH));
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
