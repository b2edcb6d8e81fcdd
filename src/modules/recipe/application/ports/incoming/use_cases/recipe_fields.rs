use rust_decimal::Decimal;

use crate::recipe::application::domain::entities::{unique_ids, Price, PriceError};
use crate::shared::PatchField;

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_LINK_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeFieldError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must be at most {MAX_TITLE_LENGTH} characters")]
    TitleTooLong,

    #[error("Time must be zero or more minutes")]
    NegativeTime,

    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    #[error("Link must be at most {MAX_LINK_LENGTH} characters")]
    LinkTooLong,
}

impl RecipeFieldError {
    /// Request field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong => "title",
            Self::NegativeTime => "time_minutes",
            Self::InvalidPrice(_) => "price",
            Self::LinkTooLong => "link",
        }
    }
}

/// Every writable field, as sent on create and full replace.
#[derive(Debug, Clone, Default)]
pub struct RecipeFields {
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub link: Option<String>,
    pub tags: Vec<i32>,
    pub ingredients: Vec<i32>,
}

/// Partial update; anything left `None` / `Unset` is not touched.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Decimal>,
    pub link: PatchField<String>,
    pub tags: Option<Vec<i32>>,
    pub ingredients: Option<Vec<i32>>,
}

pub(super) fn title(raw: &str) -> Result<String, RecipeFieldError> {
    let title = raw.trim();

    if title.is_empty() {
        return Err(RecipeFieldError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(RecipeFieldError::TitleTooLong);
    }

    Ok(title.to_string())
}

pub(super) fn time_minutes(value: i32) -> Result<i32, RecipeFieldError> {
    if value < 0 {
        return Err(RecipeFieldError::NegativeTime);
    }
    Ok(value)
}

pub(super) fn price(value: Decimal) -> Result<Decimal, RecipeFieldError> {
    Ok(Price::parse(value)?.value())
}

/// A blank link is stored as no link.
pub(super) fn link(raw: Option<String>) -> Result<Option<String>, RecipeFieldError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let link = raw.trim();
    if link.is_empty() {
        return Ok(None);
    }

    if link.chars().count() > MAX_LINK_LENGTH {
        return Err(RecipeFieldError::LinkTooLong);
    }

    Ok(Some(link.to_string()))
}

pub(super) fn ids(ids: Vec<i32>) -> Vec<i32> {
    unique_ids(ids)
}
