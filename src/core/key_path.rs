//! Purpose: Resolve a key, or a delimited key path, against a JSON mapping.
//! Exports: `Key`, `KeyPath`, `DEFAULT_DELIMITER`, `lookup`, `lookup_and_narrow`.
//! Role: The lookup primitive shared by every extractor.
//! Invariants: Keys match verbatim unless a delimiter was opted into; a plain `&str` never walks.
//! Invariants: A verbatim key always wins over path walking.
//! Invariants: Path walking only descends through mappings; any other value ends the walk with no result.

use serde_json::Value;

use crate::core::narrow::Narrow;
use crate::json::JsonMap;

pub const DEFAULT_DELIMITER: char = '.';

/// Borrowed view of a key plus the delimiter used for nested lookups.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KeyPath<'a> {
    key: &'a str,
    delimiter: Option<char>,
}

impl<'a> KeyPath<'a> {
    /// A key that is only ever matched verbatim.
    pub fn new(key: &'a str) -> Self {
        Self {
            key,
            delimiter: None,
        }
    }

    /// A key that walks nested mappings on `DEFAULT_DELIMITER` when the verbatim key misses.
    pub fn nested(key: &'a str) -> Self {
        KeyPath::new(key).with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }
}

impl<'a> From<&'a str> for KeyPath<'a> {
    fn from(key: &'a str) -> Self {
        KeyPath::new(key)
    }
}

impl<'a> From<&'a String> for KeyPath<'a> {
    fn from(key: &'a String) -> Self {
        KeyPath::new(key.as_str())
    }
}

impl<'a> From<&'a Key> for KeyPath<'a> {
    fn from(key: &'a Key) -> Self {
        key.path()
    }
}

/// Owned key captured by extractor values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Key {
    name: String,
    delimiter: Option<char>,
}

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delimiter: None,
        }
    }

    pub fn nested(name: impl Into<String>) -> Self {
        Key::new(name).with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> KeyPath<'_> {
        KeyPath {
            key: &self.name,
            delimiter: self.delimiter,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::new(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::new(name)
    }
}

pub fn lookup<'m>(map: &'m JsonMap, path: KeyPath<'_>) -> Option<&'m Value> {
    if let Some(value) = map.get(path.key) {
        return Some(value);
    }
    let delimiter = path.delimiter?;
    if !path.key.contains(delimiter) {
        return None;
    }
    let mut segments = path.key.split(delimiter);
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

pub fn lookup_and_narrow<T: Narrow>(map: &JsonMap, path: KeyPath<'_>) -> Option<T> {
    lookup(map, path).and_then(T::narrow)
}
