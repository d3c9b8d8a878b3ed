//! Error types for the translator

use std::fmt;
use thiserror::Error;

/// Machine-readable classification carried by every [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Generic translator failure (bad language tag, config, I/O)
    Translator,
    /// The translations root directory could not be listed
    InvalidTranslationsDirectory,
    /// A language directory could not be listed
    InvalidLanguageDirectory,
    /// A resource file failed to parse or merge into its bundle
    Resource,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Translator => "TranslatorError",
            ErrorCode::InvalidTranslationsDirectory => "INVALID_TRANSLATIONS_DIRECTORY",
            ErrorCode::InvalidLanguageDirectory => "INVALID_LANGUAGE_DIRECTORY",
            ErrorCode::Resource => "RESOURCE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translator error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("An error has occurred while accessing {path}: {source}")]
    InvalidTranslationsDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read files from {language}: {source}")]
    InvalidLanguageDirectory {
        language: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not build bundle for {file}: {}", .errors.join("; "))]
    Resource { file: String, errors: Vec<String> },

    #[error("Translator error: {0}")]
    Translator(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the code identifying the kind of failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidTranslationsDirectory { .. } => ErrorCode::InvalidTranslationsDirectory,
            Error::InvalidLanguageDirectory { .. } => ErrorCode::InvalidLanguageDirectory,
            Error::Resource { .. } => ErrorCode::Resource,
            Error::Translator(_) | Error::Config(_) | Error::Io(_) => ErrorCode::Translator,
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
