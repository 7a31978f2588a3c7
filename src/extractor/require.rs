//! Purpose: Turn extractor results into errors for `FromJson` implementations.
//! Exports: `require`, `require_object`, `require_enum`, `require_with`.
//! Role: The one place a decode failure is given a reason; extractors themselves stay `Option`-valued.
//! Invariants: A key that does not resolve is always `MissingKey`, whatever the target shape.

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::key_path::{KeyPath, lookup};
use crate::core::narrow::Narrow;
use crate::extractor::enums::RawEnum;
use crate::extractor::object::FromJson;
use crate::json::JsonMap;

pub fn require<'k, T: Narrow>(map: &JsonMap, key: impl Into<KeyPath<'k>>) -> Result<T, Error> {
    let path = key.into();
    let value = lookup(map, path).ok_or_else(|| Error::missing(path.key()))?;
    T::narrow(value).ok_or_else(|| mismatch(value, path))
}

pub fn require_object<'k, T: FromJson>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Result<T, Error> {
    let path = key.into();
    let value = lookup(map, path).ok_or_else(|| Error::missing(path.key()))?;
    let sub = value.as_object().ok_or_else(|| mismatch(value, path))?;
    T::from_json(sub).map_err(|err| {
        Error::new(ErrorKind::Malformed)
            .with_message("nested object rejected")
            .with_key(path.key())
            .with_source(err)
    })
}

pub fn require_enum<'k, T: RawEnum>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Result<T, Error> {
    let path = key.into();
    let raw: T::Raw = require(map, path)?;
    T::from_raw(raw).ok_or_else(|| Error::new(ErrorKind::Unmatched).with_key(path.key()))
}

/// Run any extractor, reporting `MissingKey` when the key does not resolve and
/// `Malformed` when it resolves but the extractor yields nothing.
pub fn require_with<'k, T, F>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
    extract: F,
) -> Result<T, Error>
where
    F: FnOnce(&JsonMap, KeyPath<'k>) -> Option<T>,
{
    let path = key.into();
    if lookup(map, path).is_none() {
        return Err(Error::missing(path.key()));
    }
    extract(map, path).ok_or_else(|| Error::new(ErrorKind::Malformed).with_key(path.key()))
}

fn mismatch(value: &Value, path: KeyPath<'_>) -> Error {
    Error::new(ErrorKind::TypeMismatch)
        .with_message(format!("found {}", shape_name(value)))
        .with_key(path.key())
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{require, require_enum, require_object, require_with};
    use crate::core::error::{Error, ErrorKind};
    use crate::extractor::date::decode_date_iso8601;
    use crate::extractor::object::FromJson;
    use crate::json::JsonMap;
    use serde_json::{Value, json};
    use std::error::Error as _;

    #[derive(Debug)]
    struct Named {
        name: String,
    }

    impl FromJson for Named {
        fn from_json(map: &JsonMap) -> Result<Self, Error> {
            Ok(Named {
                name: require(map, "name")?,
            })
        }
    }

    fn map(value: Value) -> JsonMap {
        value.as_object().cloned().expect("object fixture")
    }

    #[test]
    fn require_distinguishes_missing_from_mismatch() {
        let m = map(json!({"n": "7"}));
        let missing = require::<i64>(&m, "x").unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingKey);
        assert_eq!(missing.key(), Some("x"));

        let mismatch = require::<i64>(&m, "n").unwrap_err();
        assert_eq!(mismatch.kind(), ErrorKind::TypeMismatch);
        assert_eq!(mismatch.to_string(), "type mismatch: found string (key: n)");
    }

    #[test]
    fn require_object_wraps_nested_errors() {
        let m = map(json!({"ok": {"name": "a"}, "bad": {"name": 1}}));
        let named: Named = require_object(&m, "ok").expect("named");
        assert_eq!(named.name, "a");

        let err = require_object::<Named>(&m, "bad").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert_eq!(err.key(), Some("bad"));
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "type mismatch: found number (key: name)");
    }

    crate::raw_enum! {
        #[derive(Debug, PartialEq)]
        enum Mode: String {
            Fast = "fast",
        }
    }

    #[test]
    fn require_enum_separates_unmatched_from_mismatch() {
        let m = map(json!({"ok": "fast", "slow": "slow", "num": 1}));
        assert_eq!(require_enum::<Mode>(&m, "ok").expect("mode"), Mode::Fast);
        let unmatched = require_enum::<Mode>(&m, "slow").unwrap_err();
        assert_eq!(unmatched.kind(), ErrorKind::Unmatched);
        assert_eq!(unmatched.key(), Some("slow"));
        let mismatch = require_enum::<Mode>(&m, "num").unwrap_err();
        assert_eq!(mismatch.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn require_with_reports_malformed_values() {
        let m = map(json!({"when": "yesterday"}));
        let err = require_with(&m, "when", |m, key| decode_date_iso8601(m, key)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        let err = require_with(&m, "then", |m, key| decode_date_iso8601(m, key)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingKey);
    }
}
