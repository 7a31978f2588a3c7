//! Purpose: Exact, non-coercing type tests from a JSON value to a Rust shape.
//! Exports: `Narrow`.
//! Role: Base case for every extractor that targets a primitively representable type.
//! Invariants: Narrowing never converts between JSON variants ("42" is not a number).
//! Invariants: Integers must fit the target width exactly; fractional numbers never narrow to integers.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::json::JsonMap;

/// A shape that can be read out of a JSON value by a checked variant test.
pub trait Narrow: Sized {
    fn narrow(value: &Value) -> Option<Self>;
}

impl Narrow for Value {
    fn narrow(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl Narrow for bool {
    fn narrow(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Narrow for String {
    fn narrow(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Narrow for Number {
    fn narrow(value: &Value) -> Option<Self> {
        value.as_number().cloned()
    }
}

impl Narrow for f64 {
    fn narrow(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Narrow for f32 {
    fn narrow(value: &Value) -> Option<Self> {
        value
            .as_f64()
            .map(|number| number as f32)
            .filter(|number| number.is_finite())
    }
}

macro_rules! narrow_signed {
    ($($ty:ty),*) => {
        $(
            impl Narrow for $ty {
                fn narrow(value: &Value) -> Option<Self> {
                    value.as_i64().and_then(|number| <$ty>::try_from(number).ok())
                }
            }
        )*
    };
}

macro_rules! narrow_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Narrow for $ty {
                fn narrow(value: &Value) -> Option<Self> {
                    value.as_u64().and_then(|number| <$ty>::try_from(number).ok())
                }
            }
        )*
    };
}

narrow_signed!(i8, i16, i32, i64, isize);
narrow_unsigned!(u8, u16, u32, u64, usize);

impl Narrow for JsonMap {
    fn narrow(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl<T: Narrow> Narrow for Vec<T> {
    fn narrow(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::narrow).collect()
    }
}

impl<T: Narrow> Narrow for BTreeMap<String, T> {
    fn narrow(value: &Value) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(key, item)| T::narrow(item).map(|item| (key.clone(), item)))
            .collect()
    }
}
