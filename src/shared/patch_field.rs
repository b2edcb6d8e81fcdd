use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear (nullable fields only)
// - Value(v): replace with v
//
// Request DTOs mark every PatchField with #[serde(default)] so that an
// omitted key lands on Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        link: PatchField<String>,
        #[serde(default)]
        tags: PatchField<Vec<i32>>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.link.is_unset());
        assert!(body.tags.is_unset());
    }

    #[test]
    fn explicit_null_is_null() {
        let body: Body = serde_json::from_str(r#"{"link": null}"#).unwrap();
        assert!(body.link.is_null());
        assert!(body.tags.is_unset());
    }

    #[test]
    fn value_is_value() {
        let body: Body =
            serde_json::from_str(r#"{"link": "https://x.y", "tags": [1, 2]}"#).unwrap();
        assert_eq!(body.link, PatchField::Value("https://x.y".to_string()));
        assert_eq!(body.tags, PatchField::Value(vec![1, 2]));
    }
}
