// URL fields, parsed with WHATWG rules and no base: relative references and "" have no value.
use url::Url;

use crate::core::key_path::{KeyPath, lookup};
use crate::json::JsonMap;

pub fn decode_url<'k>(map: &JsonMap, key: impl Into<KeyPath<'k>>) -> Option<Url> {
    let path = key.into();
    parse_url(lookup(map, path)?.as_str()?, path)
}

pub fn decode_url_array<'k>(map: &JsonMap, key: impl Into<KeyPath<'k>>) -> Option<Vec<Url>> {
    let path = key.into();
    lookup(map, path)?
        .as_array()?
        .iter()
        .map(|item| parse_url(item.as_str()?, path))
        .collect()
}

fn parse_url(raw: &str, path: KeyPath<'_>) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::trace!(key = path.key(), error = %err, "url did not parse");
            None
        }
    }
}
