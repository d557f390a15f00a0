//! Omitted-vs-null handling for partial models

use serde::{Deserialize, Deserializer};

use super::validate::{ValidationError, ValidationResult};

/// Deserialize a field that is known to be present in the input.
///
/// Use with `#[serde(default, deserialize_with = "present")]` on an
/// `Option<Option<T>>`: an omitted key falls back to `None` through
/// `default`, an explicit `null` becomes `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reject an explicit `null` for a field that is not nullable
pub fn reject_null<T>(field: &str, value: &Option<Option<T>>) -> ValidationResult<()> {
    match value {
        Some(None) => Err(ValidationError::new(field, "may not be null")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct Sparse {
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        name: Option<Option<String>>,
    }

    #[test]
    fn test_omitted_key() {
        let sparse: Sparse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sparse.name, None);
        assert_eq!(serde_json::to_value(&sparse).unwrap(), json!({}));
    }

    #[test]
    fn test_explicit_null() {
        let sparse: Sparse = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(sparse.name, Some(None));
        assert_eq!(serde_json::to_value(&sparse).unwrap(), json!({"name": null}));
        assert!(reject_null("name", &sparse.name).is_err());
    }

    #[test]
    fn test_explicit_value() {
        let sparse: Sparse = serde_json::from_value(json!({"name": "Bob"})).unwrap();
        assert_eq!(sparse.name, Some(Some("Bob".to_string())));
        assert!(reject_null("name", &sparse.name).is_ok());
    }
}
