//! Core module - Configuration and error types

mod config;
mod error;

pub use config::{Config, TranslatorConfig};
pub use error::{Error, ErrorCode, Result};
