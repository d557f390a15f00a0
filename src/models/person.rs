//! Person models
//!
//! People are served as their raw stored records. Both fields of the
//! partial model are nullable.

use serde::{Deserialize, Serialize};

use super::patch::present;
use super::validate::{non_empty_trimmed, Validate, ValidationError, ValidationResult};

/// Body for POST and PUT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonIn {
    pub name: String,
    pub age: i64,
}

impl Validate for PersonIn {
    fn validate(self) -> ValidationResult<Self> {
        Ok(Self {
            name: non_empty_trimmed("name", self.name)?,
            age: non_negative_age(self.age)?,
        })
    }
}

/// Body for PATCH
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<i64>>,
}

impl Validate for PersonPatch {
    fn validate(self) -> ValidationResult<Self> {
        let name = match self.name {
            Some(Some(name)) => Some(Some(non_empty_trimmed("name", name)?)),
            other => other,
        };
        let age = match self.age {
            Some(Some(age)) => Some(Some(non_negative_age(age)?)),
            other => other,
        };
        Ok(Self { name, age })
    }
}

fn non_negative_age(age: i64) -> ValidationResult<i64> {
    if age < 0 {
        return Err(ValidationError::new("age", "must not be negative"));
    }
    Ok(age)
}
