// Core modules: error modeling, exact narrowing, and key lookup.
pub mod error;
pub mod key_path;
pub mod narrow;
