//! Data transfer objects exposed at the API boundary.
//!
//! Every entity has a DTO carrying its `Id` and client-editable fields (timestamps are never
//! exposed) and, when it can be updated, a patch type whose fields are all optional so that
//! `PATCH` requests only touch the fields the client actually sent. Field names are serialized
//! in PascalCase.
//!
//! `Active` is optional on input: omitted on `POST` it defaults to `true`, omitted on `PUT` the
//! stored flag is kept.

pub mod api;
pub mod audit;
pub mod organization;
pub mod process;
pub mod security;
pub mod training;

use serde::{Deserialize, Deserializer};

/// Deserializes a patch field over a nullable column.
///
/// Paired with `#[serde(default)]`, an absent field stays `None` while an explicit `null`
/// becomes `Some(None)` and clears the column.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
