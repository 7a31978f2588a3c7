// Enum resolution by raw value; the raw value itself is narrowed exactly like any other field.
use crate::core::key_path::{KeyPath, lookup, lookup_and_narrow};
use crate::core::narrow::Narrow;
use crate::json::JsonMap;

/// An enumeration whose cases are identified by a primitive raw value.
pub trait RawEnum: Sized {
    type Raw: Narrow;

    fn from_raw(raw: Self::Raw) -> Option<Self>;
}

/// Declare a fieldless enum together with its raw values and a [`RawEnum`] impl.
///
/// ```
/// jsonfield::raw_enum! {
///     #[derive(Debug, PartialEq)]
///     pub enum Status: String {
///         Active = "A",
///         Inactive = "I",
///     }
/// }
///
/// use jsonfield::api::RawEnum;
///
/// assert_eq!(Status::from_raw("I".to_string()), Some(Status::Inactive));
/// assert_eq!(Status::from_raw("?".to_string()), None);
/// ```
#[macro_export]
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $( $(#[$variant_meta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::api::RawEnum for $name {
            type Raw = $raw;

            fn from_raw(raw: Self::Raw) -> Option<Self> {
                $(
                    if raw == $value {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }
    };
}

pub fn decode_enum<'k, T: RawEnum>(map: &JsonMap, key: impl Into<KeyPath<'k>>) -> Option<T> {
    let path = key.into();
    let raw = lookup_and_narrow::<T::Raw>(map, path)?;
    let resolved = T::from_raw(raw);
    if resolved.is_none() {
        tracing::trace!(key = path.key(), "raw value matches no case");
    }
    resolved
}

pub fn decode_enum_array<'k, T: RawEnum>(
    map: &JsonMap,
    key: impl Into<KeyPath<'k>>,
) -> Option<Vec<T>> {
    lookup(map, key.into())?
        .as_array()?
        .iter()
        .map(|item| T::Raw::narrow(item).and_then(T::from_raw))
        .collect()
}
