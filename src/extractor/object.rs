//! Purpose: Decode nested custom objects and collections of them.
//! Exports: `FromJson`, `decode_object`, `decode_array_of_objects`, `decode_object_map`.
//! Role: Bridge from a raw sub-mapping to a domain type's own constructor.
//! Invariants: A failing `FromJson::from_json` is reported as no value, never a partial result.
//! Invariants: Collections are all-or-nothing and keep input order.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::error::Error;
use crate::core::key_path::{KeyPath, lookup};
use crate::json::JsonMap;

/// Construct `Self` from a JSON mapping.
///
/// Implementations usually read their fields with [`crate::api::require`] or
/// the `decode*` functions and bail out with `?` on the first missing field.
pub trait FromJson: Sized {
    fn from_json(map: &JsonMap) -> Result<Self, Error>;
}

pub fn decode_object<'k, T: FromJson>(map: &JsonMap, key: impl Into<KeyPath<'k>>) -> Option<T> {
    let path = key.into();
    let Some(value) = lookup(map, path) else {
        tracing::trace!(key = path.key(), "object key absent");
        return None;
    };
    from_value(value, path)
}

pub fn decode_array_of_objects<'k, T: FromJson>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Option<Vec<T>> {
    let path = key.into();
    let items = lookup(map, path)?.as_array().or_else(|| {
        tracing::trace!(key = path.key(), "value is not an array");
        None
    })?;
    items.iter().map(|item| from_value(item, path)).collect()
}

pub fn decode_object_map<'k, T: FromJson>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Option<BTreeMap<String, T>> {
    let path = key.into();
    let entries = lookup(map, path)?.as_object().or_else(|| {
        tracing::trace!(key = path.key(), "value is not a mapping");
        None
    })?;
    entries
        .iter()
        .map(|(name, item)| from_value(item, path).map(|item| (name.clone(), item)))
        .collect()
}

fn from_value<T: FromJson>(value: &Value, path: KeyPath<'_>) -> Option<T> {
    let Some(sub) = value.as_object() else {
        tracing::trace!(key = path.key(), "value is not a mapping");
        return None;
    };
    match T::from_json(sub) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            tracing::debug!(key = path.key(), error = %err, "nested decode failed");
            None
        }
    }
}
