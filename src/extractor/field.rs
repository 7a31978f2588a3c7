// Primitive field and loosely-typed tabular decoding on top of the narrowing primitive.
use std::collections::BTreeMap;

use crate::core::key_path::{KeyPath, lookup_and_narrow};
use crate::core::narrow::Narrow;
use crate::json::JsonMap;

pub fn decode<'k, T: Narrow>(map: &JsonMap, key: impl Into<KeyPath<'k>>) -> Option<T> {
    lookup_and_narrow(map, key.into())
}

/// Sequence of mappings whose values all narrow to `T`; one stray entry voids the whole array.
pub fn decode_array_of_maps<'k, T: Narrow>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Option<Vec<BTreeMap<String, T>>> {
    lookup_and_narrow(map, key.into())
}
