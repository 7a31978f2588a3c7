// Serde bridge: any `DeserializeOwned` type can be read from a field without a `FromJson` impl.
use serde::de::DeserializeOwned;

use crate::core::key_path::{KeyPath, lookup};
use crate::json::JsonMap;

pub fn decode_deserialize<'k, T: DeserializeOwned>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Option<T> {
    let path = key.into();
    let value = lookup(map, path)?;
    match T::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            tracing::debug!(key = path.key(), error = %err, "deserialize failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::decode_deserialize;
    use crate::json::JsonMap;
    use serde::Deserialize;
    use serde_json::{Value, json};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn map(value: Value) -> JsonMap {
        value.as_object().cloned().expect("object fixture")
    }

    #[test]
    fn deserializes_derived_types() {
        let m = map(json!({"origin": {"x": 1, "y": -2}, "pair": [3, 4]}));
        assert_eq!(
            decode_deserialize::<Point>(&m, "origin"),
            Some(Point { x: 1, y: -2 })
        );
        assert_eq!(decode_deserialize::<(u8, u8)>(&m, "pair"), Some((3, 4)));
    }

    #[test]
    fn deserialize_errors_have_no_value() {
        let m = map(json!({"origin": {"x": "1", "y": 2}}));
        assert_eq!(decode_deserialize::<Point>(&m, "origin"), None);
        assert_eq!(decode_deserialize::<Point>(&m, "absent"), None);
    }
}
