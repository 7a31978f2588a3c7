//! Purpose: Reusable extractor values that capture a key (and any format) once.
//! Exports: `Extract`, the extractor structs, and their factory functions.
//! Role: Declarative field definitions; each `extract` call delegates to the matching free function.
//! Invariants: Extractors are immutable after construction and hold no per-call state.
//! Invariants: Extractors are `Send + Sync` regardless of their target type.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use url::Url;

use crate::core::key_path::Key;
use crate::core::narrow::Narrow;
use crate::extractor::date::{DateFormat, decode_date, decode_date_iso8601};
use crate::extractor::deserialize::decode_deserialize;
use crate::extractor::enums::{RawEnum, decode_enum};
use crate::extractor::field::{decode, decode_array_of_maps};
use crate::extractor::object::{FromJson, decode_array_of_objects, decode_object, decode_object_map};
use crate::extractor::url::decode_url;
use crate::json::JsonMap;

/// A function from a JSON mapping to an optional typed value.
pub trait Extract {
    type Output;

    fn extract(&self, map: &JsonMap) -> Option<Self::Output>;
}

impl<E: Extract + ?Sized> Extract for &E {
    type Output = E::Output;

    fn extract(&self, map: &JsonMap) -> Option<Self::Output> {
        (**self).extract(map)
    }
}

macro_rules! typed_extractor {
    ($(#[$meta:meta])* $name:ident<$t:ident: $bound:path> => $output:ty, $decode:path) => {
        $(#[$meta])*
        pub struct $name<$t> {
            key: Key,
            shape: PhantomData<fn() -> $t>,
        }

        impl<$t> $name<$t> {
            pub fn new(key: impl Into<Key>) -> Self {
                Self {
                    key: key.into(),
                    shape: PhantomData,
                }
            }

            pub fn key(&self) -> &Key {
                &self.key
            }
        }

        impl<$t> Clone for $name<$t> {
            fn clone(&self) -> Self {
                Self::new(self.key.clone())
            }
        }

        impl<$t> fmt::Debug for $name<$t> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("key", &self.key)
                    .field("shape", &std::any::type_name::<$t>())
                    .finish()
            }
        }

        impl<$t: $bound> Extract for $name<$t> {
            type Output = $output;

            fn extract(&self, map: &JsonMap) -> Option<Self::Output> {
                $decode(map, self.key.path())
            }
        }
    };
}

typed_extractor!(
    /// Primitive field narrowed to `T`.
    Field<T: Narrow> => T, decode
);
typed_extractor!(
    /// Nested custom object.
    Object<T: FromJson> => T, decode_object
);
typed_extractor!(
    /// Array of nested custom objects.
    Objects<T: FromJson> => Vec<T>, decode_array_of_objects
);
typed_extractor!(Maps<T: Narrow> => Vec<std::collections::BTreeMap<String, T>>, decode_array_of_maps);
typed_extractor!(ObjectMap<T: FromJson> => std::collections::BTreeMap<String, T>, decode_object_map);
typed_extractor!(Enumeration<T: RawEnum> => T, decode_enum);
typed_extractor!(Deserialized<T: DeserializeOwned> => T, decode_deserialize);

#[derive(Clone, Debug)]
enum DateSource {
    Iso8601,
    Format(DateFormat),
}

#[derive(Clone, Debug)]
pub struct DateField {
    key: Key,
    source: DateSource,
}

impl DateField {
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// `None` for the shared ISO-8601 format.
    pub fn format(&self) -> Option<&DateFormat> {
        match &self.source {
            DateSource::Iso8601 => None,
            DateSource::Format(format) => Some(format),
        }
    }
}

impl Extract for DateField {
    type Output = OffsetDateTime;

    fn extract(&self, map: &JsonMap) -> Option<OffsetDateTime> {
        match &self.source {
            DateSource::Iso8601 => decode_date_iso8601(map, self.key.path()),
            DateSource::Format(format) => decode_date(map, self.key.path(), format),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UrlField {
    key: Key,
}

impl UrlField {
    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl Extract for UrlField {
    type Output = Url;

    fn extract(&self, map: &JsonMap) -> Option<Url> {
        decode_url(map, self.key.path())
    }
}

pub fn field<T: Narrow>(key: impl Into<Key>) -> Field<T> {
    Field::new(key)
}

pub fn object<T: FromJson>(key: impl Into<Key>) -> Object<T> {
    Object::new(key)
}

pub fn objects<T: FromJson>(key: impl Into<Key>) -> Objects<T> {
    Objects::new(key)
}

pub fn maps<T: Narrow>(key: impl Into<Key>) -> Maps<T> {
    Maps::new(key)
}

pub fn object_map<T: FromJson>(key: impl Into<Key>) -> ObjectMap<T> {
    ObjectMap::new(key)
}

pub fn enumeration<T: RawEnum>(key: impl Into<Key>) -> Enumeration<T> {
    Enumeration::new(key)
}

pub fn deserialized<T: DeserializeOwned>(key: impl Into<Key>) -> Deserialized<T> {
    Deserialized::new(key)
}

pub fn date(key: impl Into<Key>, format: DateFormat) -> DateField {
    DateField {
        key: key.into(),
        source: DateSource::Format(format),
    }
}

pub fn date_iso8601(key: impl Into<Key>) -> DateField {
    DateField {
        key: key.into(),
        source: DateSource::Iso8601,
    }
}

pub fn url(key: impl Into<Key>) -> UrlField {
    UrlField { key: key.into() }
}

#[cfg(test)]
mod tests {
    use super::{
        Extract, Field, date, date_iso8601, enumeration, field, maps, object, object_map,
        objects, url,
    };
    use crate::core::error::Error;
    use crate::core::key_path::Key;
    use crate::extractor::date::DateFormat;
    use crate::extractor::object::FromJson;
    use crate::extractor::require::require;
    use crate::json::JsonMap;
    use serde_json::{Value, json};

    #[derive(Debug, PartialEq)]
    struct Tag {
        name: String,
    }

    impl FromJson for Tag {
        fn from_json(map: &JsonMap) -> Result<Self, Error> {
            Ok(Tag {
                name: require(map, "name")?,
            })
        }
    }

    crate::raw_enum! {
        #[derive(Debug, PartialEq)]
        enum Level: i64 {
            Trace = 10,
            Info = 20,
        }
    }

    fn map(value: Value) -> JsonMap {
        value.as_object().cloned().expect("object fixture")
    }

    #[test]
    fn extractors_are_reusable_across_mappings() {
        let id = field::<u64>("id");
        let first = map(json!({"id": 1}));
        let second = map(json!({"id": 2}));
        let third = map(json!({"id": "3"}));
        assert_eq!(id.extract(&first), Some(1));
        assert_eq!(id.extract(&second), Some(2));
        assert_eq!(id.extract(&third), None);
        assert_eq!(id.extract(&first), Some(1));
    }

    #[test]
    fn every_factory_delegates() {
        let m = map(json!({
            "tag": {"name": "a"},
            "tags": [{"name": "a"}, {"name": "b"}],
            "rows": [{"x": 1}],
            "by_id": {"1": {"name": "one"}},
            "level": 20,
            "link": "https://example.com/x",
            "when": "2015-08-16T20:51:46Z",
            "day": "2015-08-16",
        }));
        assert_eq!(object::<Tag>("tag").extract(&m), Some(Tag { name: "a".into() }));
        assert_eq!(objects::<Tag>("tags").extract(&m).map(|t| t.len()), Some(2));
        assert_eq!(maps::<i64>("rows").extract(&m).map(|r| r.len()), Some(1));
        assert!(object_map::<Tag>("by_id").extract(&m).is_some());
        assert_eq!(enumeration::<Level>("level").extract(&m), Some(Level::Info));
        assert_eq!(
            url("link").extract(&m).map(|u| u.path().to_string()),
            Some("/x".to_string())
        );
        let iso = date_iso8601("when");
        assert!(iso.format().is_none());
        assert!(iso.extract(&m).is_some());
        let day = date("day", DateFormat::from_pattern("yyyy-MM-dd").expect("format"));
        assert_eq!(day.format().map(|f| f.pattern()), Some("yyyy-MM-dd"));
        assert!(day.extract(&m).is_some());
    }

    #[test]
    fn keys_carry_their_delimiter() {
        let m = map(json!({"a": {"b": true}}));
        assert_eq!(field::<bool>("a.b").extract(&m), None);
        assert_eq!(field::<bool>(Key::nested("a.b")).extract(&m), Some(true));
        assert_eq!(
            field::<bool>(Key::new("a:b").with_delimiter(':')).extract(&m),
            Some(true)
        );
    }

    #[test]
    fn extractors_are_clone_debug_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Field<std::rc::Rc<String>>>();

        let original = field::<String>("name");
        let copy = original.clone();
        assert_eq!(copy.key(), original.key());
        assert!(format!("{copy:?}").contains("name"));
    }

    #[test]
    fn references_extract_too() {
        let id = field::<i64>("id");
        let by_ref = &id;
        assert_eq!(by_ref.extract(&map(json!({"id": -1}))), Some(-1));
    }
}
