//! Item models

use serde::{Deserialize, Serialize};

use super::patch::{present, reject_null};
use super::validate::{non_empty_trimmed, Validate, ValidationError, ValidationResult};
use crate::store::RecordId;

/// Body for POST and PUT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemIn {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl Validate for ItemIn {
    fn validate(self) -> ValidationResult<Self> {
        let name = non_empty_trimmed("name", self.name)?;
        let price = positive_price(self.price)?;
        // Derived default, applied on full bodies only.
        let description = self
            .description
            .unwrap_or_else(|| format!("Description for {}", name));

        Ok(Self {
            name,
            description: Some(description),
            price,
        })
    }
}

/// Response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOut {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Body for PATCH
///
/// `description` is nullable; `name` and `price` are not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<f64>>,
}

impl Validate for ItemPatch {
    fn validate(self) -> ValidationResult<Self> {
        reject_null("name", &self.name)?;
        reject_null("price", &self.price)?;

        let name = match self.name {
            Some(Some(name)) => Some(Some(non_empty_trimmed("name", name)?)),
            other => other,
        };
        let price = match self.price {
            Some(Some(price)) => Some(Some(positive_price(price)?)),
            other => other,
        };

        Ok(Self {
            name,
            description: self.description,
            price,
        })
    }
}

fn positive_price(price: f64) -> ValidationResult<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::new("price", "must be positive"));
    }
    Ok(price)
}
