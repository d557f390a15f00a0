//! User models
//!
//! The response model deliberately omits `name`: a created or updated user
//! is echoed back as its id and type only.

use serde::{Deserialize, Serialize};

use super::patch::{present, reject_null};
use super::validate::{non_empty_trimmed, Validate, ValidationResult};
use crate::store::RecordId;

/// Account kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Admin,
    Customer,
}

/// Body for POST and PUT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIn {
    pub name: String,
    pub user_type: UserType,
}

impl Validate for UserIn {
    fn validate(self) -> ValidationResult<Self> {
        Ok(Self {
            name: non_empty_trimmed("name", self.name)?,
            user_type: self.user_type,
        })
    }
}

/// Response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOut {
    pub id: RecordId,
    pub user_type: UserType,
}

/// Body for PATCH
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<Option<UserType>>,
}

impl Validate for UserPatch {
    fn validate(self) -> ValidationResult<Self> {
        reject_null("name", &self.name)?;
        reject_null("user_type", &self.user_type)?;

        let name = match self.name {
            Some(Some(name)) => Some(Some(non_empty_trimmed("name", name)?)),
            other => other,
        };

        Ok(Self {
            name,
            user_type: self.user_type,
        })
    }
}
