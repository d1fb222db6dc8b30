//! Error types and handling infrastructure for showcase.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! library error types. The binary layers `anyhow` on top for context.
//!
//! Ignored navigation (requests dropped while a transition is in flight) is not an
//! error and never shows up here; see [`crate::carousel::NavOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for showcase operations.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// File system related errors (deck or config file unreadable, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Deck or config file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Slide deck failed validation (empty, duplicate ids)
    #[error("Invalid slide deck: {message}")]
    InvalidDeck { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Caller passed a value outside the accepted domain
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for showcase operations.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

impl ShowcaseError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidDeck error
    pub fn invalid_deck(message: impl Into<String>) -> Self {
        Self::InvalidDeck {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ShowcaseError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::FileError {
            message: message.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/decks/certs.toml");

        let not_found = ShowcaseError::FileNotFound { path };
        assert_eq!(not_found.to_string(), "File not found: /decks/certs.toml");

        let deck = ShowcaseError::invalid_deck("duplicate slide id 3");
        assert_eq!(deck.to_string(), "Invalid slide deck: duplicate slide id 3");

        let arg = ShowcaseError::invalid_argument("slide index 9 out of range");
        assert_eq!(
            arg.to_string(),
            "Invalid argument: slide index 9 out of range"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            ShowcaseError::ui("terminal resize failed"),
            ShowcaseError::UIError { .. }
        ));
        assert!(matches!(
            ShowcaseError::config("bad toml"),
            ShowcaseError::ConfigError { .. }
        ));
        assert!(matches!(
            ShowcaseError::invalid_argument("index"),
            ShowcaseError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: ShowcaseError = io_err.into();

        match err {
            ShowcaseError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
    }
}
