//! # Request and Response Models
//!
//! Typed bodies for every collection. Decoding is done by `serde`; the
//! [`Validate`] trait adds the checks and normalization a type alone cannot
//! express.
//!
//! Partial models (`*Patch`) keep every field as `Option<Option<T>>` so that
//! an omitted key and an explicit `null` stay distinguishable. Serializing a
//! partial model yields only the keys the caller sent.

mod item;
mod patch;
mod person;
mod user;
mod validate;

pub use item::{ItemIn, ItemOut, ItemPatch};
pub use patch::{present, reject_null};
pub use person::{PersonIn, PersonPatch};
pub use user::{UserIn, UserOut, UserPatch, UserType};
pub use validate::{non_empty_trimmed, Validate, ValidationError, ValidationResult};
