use rust_decimal::Decimal;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Price
// ──────────────────────────────────────────────────────────
//

/// Total digits a stored price may carry, decimals included.
pub const PRICE_MAX_DIGITS: u32 = 5;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("Ensure that there are no more than 2 decimal places")]
    TooManyDecimals,

    #[error("Ensure that there are no more than 5 digits in total")]
    OutOfRange,
}

/// Fixed-point price, always held with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    pub fn parse(value: Decimal) -> Result<Self, PriceError> {
        if value.normalize().scale() > PRICE_DECIMAL_PLACES {
            return Err(PriceError::TooManyDecimals);
        }

        let limit = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES));
        if value.abs() >= limit {
            return Err(PriceError::OutOfRange);
        }

        let mut price = value;
        price.rescale(PRICE_DECIMAL_PLACES);
        Ok(Self(price))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Recipe list filter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {param} id")]
pub struct RecipeFilterError {
    pub param: &'static str,
    pub value: String,
}

/// Each non-empty list keeps recipes linked to any of its ids.
/// Both lists together must both match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub tag_ids: Vec<i32>,
    pub ingredient_ids: Vec<i32>,
}

impl RecipeFilter {
    /// Parses the raw `tags=1,2` / `ingredients=3` query values.
    pub fn parse(tags: Option<&str>, ingredients: Option<&str>) -> Result<Self, RecipeFilterError> {
        Ok(Self {
            tag_ids: parse_ids("tags", tags)?,
            ingredient_ids: parse_ids("ingredients", ingredients)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tag_ids.is_empty() && self.ingredient_ids.is_empty()
    }
}

fn parse_ids(param: &'static str, raw: Option<&str>) -> Result<Vec<i32>, RecipeFilterError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>().map_err(|_| RecipeFilterError {
                param,
                value: s.to_string(),
            })
        })
        .collect()
}

/// Removes repeated ids, keeping first occurrences in order.
pub fn unique_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

//
// ──────────────────────────────────────────────────────────
// Image file naming
// ──────────────────────────────────────────────────────────
//

pub const RECIPE_IMAGE_DIR: &str = "uploads/recipe";

/// Storage key for a new recipe image: a fresh UUID with the given extension.
pub fn recipe_image_key(extension: &str) -> String {
    format!("{}/{}.{}", RECIPE_IMAGE_DIR, Uuid::new_v4(), extension)
}
