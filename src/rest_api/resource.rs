//! # Resources
//!
//! A [`Resource`] binds a collection name to the models its routes decode
//! and encode. Conversion helpers between models, fields and records live
//! here too.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::{RestError, RestResult};
use crate::models::Validate;
use crate::store::{Fields, Record, ResourceStore};

/// A collection served under `/<COLLECTION>`
pub trait Resource: Send + Sync + 'static {
    /// URL segment and log label of the collection
    const COLLECTION: &'static str;

    /// Singular name used in error messages
    const LABEL: &'static str;

    /// Full body for create and replace
    type Input: DeserializeOwned + Serialize + Validate + Send + 'static;

    /// Sparse body for merge; serializes to the keys the caller sent
    type Patch: DeserializeOwned + Serialize + Validate + Send + 'static;

    /// Response body, decoded from the stored record
    type Output: DeserializeOwned + Serialize + Send + 'static;
}

/// Serialize a validated model into the field set handed to the store
pub fn to_fields<T: Serialize>(model: &T) -> RestResult<Fields> {
    match serde_json::to_value(model) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(RestError::Internal(format!(
            "model serialized to {} instead of an object",
            other
        ))),
        Err(e) => Err(RestError::Internal(e.to_string())),
    }
}

/// Decode a stored record into the resource's response model
pub fn present<R: Resource>(record: &Record) -> RestResult<R::Output> {
    serde_json::from_value(record.to_value()).map_err(|e| {
        RestError::Internal(format!(
            "{} {} does not match its response model: {}",
            R::LABEL,
            record.id,
            e
        ))
    })
}

/// Decode and validate a raw JSON value
pub fn decode<T: DeserializeOwned + Validate>(value: Value) -> RestResult<T> {
    let model: T =
        serde_json::from_value(value).map_err(|e| RestError::InvalidBody(e.to_string()))?;
    Ok(model.validate()?)
}

/// Insert seed records through the resource's input model.
///
/// Every value is decoded and validated before the first insert, so a bad
/// seed leaves the store untouched. Returns the number of records inserted.
pub fn seed<R, S>(store: &mut S, values: &[Value]) -> RestResult<usize>
where
    R: Resource,
    S: ResourceStore + ?Sized,
{
    let mut batch = Vec::with_capacity(values.len());
    for value in values {
        let input: R::Input = decode(value.clone())?;
        batch.push(to_fields(&input)?);
    }

    let count = batch.len();
    for fields in batch {
        store.create(fields);
    }
    Ok(count)
}
