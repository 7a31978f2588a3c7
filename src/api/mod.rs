//! Purpose: Define the stable public Rust API boundary for jsonfield.
//! Exports: Extractor functions, extractor values, capability traits, and errors.
//! Role: Public, additive-only surface; callers should not need `core` or `extractor` paths.
//! Invariants: Every extractor exported here returns a complete value or `None`.
//! Invariants: Nothing exported here mutates its input or holds shared mutable state.

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::key_path::{DEFAULT_DELIMITER, Key, KeyPath, lookup, lookup_and_narrow};
pub use crate::core::narrow::Narrow;
pub use crate::extractor::date::{
    DateFormat, ISO8601_PATTERN, decode_date, decode_date_array, decode_date_iso8601,
};
pub use crate::extractor::deserialize::decode_deserialize;
pub use crate::extractor::enums::{RawEnum, decode_enum, decode_enum_array};
pub use crate::extractor::extract::{
    DateField, Deserialized, Enumeration, Extract, Field, Maps, Object, ObjectMap, Objects,
    UrlField, date, date_iso8601, deserialized, enumeration, field, maps, object, object_map,
    objects, url,
};
pub use crate::extractor::field::{decode, decode_array_of_maps};
pub use crate::extractor::object::{
    FromJson, decode_array_of_objects, decode_object, decode_object_map,
};
pub use crate::extractor::require::{require, require_enum, require_object, require_with};
pub use crate::extractor::url::{decode_url, decode_url_array};
pub use crate::json::{JsonMap, JsonValue};
