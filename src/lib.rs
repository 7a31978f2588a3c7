//! Purpose: Typed, non-panicking field extraction from already-parsed JSON mappings.
//! Exports: `api` (extractors, traits, errors) plus crate-root `decode`/`decode_object`.
//! Role: Library crate; JSON text parsing and encoding stay with serde_json and the caller.
//! Invariants: Every extractor yields a fully formed value or `None`, never a panic.
//! Invariants: Extractors are pure; re-running one on the same mapping gives the same result.
pub mod api;
pub mod core;
pub mod extractor;
pub mod json;

pub use api::{FromJson, decode, decode_object};
