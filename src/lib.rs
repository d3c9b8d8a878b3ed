//! fluent-translator library
//!
//! Loads per-language Fluent bundles from a directory tree and resolves
//! message keys with a default-language fallback.

pub mod core;
pub mod i18n;
