//! Purpose: Name the JSON tree types every extractor consumes.
//! Exports: `JsonValue`, `JsonMap`.
//! Role: Single seam for the parser's value model so callsites avoid spelling out serde_json paths.
//! Invariants: Values are produced and owned by the caller; this crate only borrows them.

pub type JsonValue = serde_json::Value;
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
