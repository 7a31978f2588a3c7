// Extractor family: one free function per target shape, plus reusable extractor values.
pub mod date;
pub mod deserialize;
pub mod enums;
pub mod extract;
pub mod field;
pub mod object;
pub mod require;
pub mod url;
