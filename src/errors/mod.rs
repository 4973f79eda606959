//! Error handling utilities for the grato application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents validation and invariant failures in journal operations.
///
/// These errors stop an operation before any state is mutated; degraded-but-
/// successful outcomes (such as a reflection falling back to the fixed string)
/// are reported through notifications instead.
///
/// # Examples
///
/// ```
/// use grato::errors::JournalError;
///
/// let error = JournalError::EmptyInput;
/// assert!(format!("{}", error).contains("empty"));
///
/// let error = JournalError::NotFound(42);
/// assert!(format!("{}", error).contains("42"));
/// ```
#[derive(Debug, Error)]
pub enum JournalError {
    /// The entry text is empty or whitespace-only after trimming.
    #[error("Entry text cannot be empty")]
    EmptyInput,

    /// No entry with the given id exists in the active user's list.
    #[error("No entry with id {0}")]
    NotFound(i64),

    /// An operation that needs a logged-in user was invoked without one.
    #[error("No user is logged in. Run 'grato login <name>' first")]
    NoActiveSession,

    /// A date filter could not be parsed.
    #[error("Invalid date '{0}'; use YYYY-MM-DD or YYYYMMDD")]
    InvalidDate(String),
}

/// Represents specific error cases that can occur in the persistent store.
///
/// Per the storage policy these never propagate out of the storage service for
/// entry loads and saves: they are logged and swallowed, and the caller sees an
/// empty list or a silently skipped write.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite database error.
    #[error("Store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// Stored value could not be serialized or parsed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Represents specific error cases that can occur during reflection generation.
///
/// `CredentialMissing` disables AI features for the session and is surfaced as
/// a persistent banner; every other variant is a transient generation failure
/// that the engine degrades around.
///
/// # Examples
///
/// ```
/// use grato::errors::AiError;
///
/// let error = AiError::CredentialMissing;
/// assert!(format!("{}", error).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Error)]
pub enum AiError {
    /// No API credential is configured.
    #[error("API credential not configured. Set GEMINI_API_KEY to enable reflections")]
    CredentialMissing,

    /// The Gemini API could not be reached.
    #[error("Reflection service unreachable: {0}")]
    Http(#[source] reqwest::Error),

    /// The API answered with a non-success status or an unparseable body.
    #[error("Invalid response from reflection service: {0}")]
    InvalidResponse(String),

    /// The API answered successfully but with no usable text.
    #[error("Reflection service returned an empty response")]
    EmptyResponse,
}

/// Represents all possible errors that can occur in the grato application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use grato::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal operations (validation, missing entries, no session).
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// Errors in the persistent store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the reflection generator.
    #[error("AI error: {0}")]
    Ai(#[from] AiError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let journal_error = AppError::Journal(JournalError::EmptyInput);
        assert!(format!("{}", journal_error).contains("empty"));

        let ai_error = AppError::Ai(AiError::EmptyResponse);
        assert!(format!("{}", ai_error).contains("empty response"));
    }

    #[test]
    fn test_journal_error_conversion_to_app_error() {
        let app_error: AppError = JournalError::NotFound(7).into();

        match app_error {
            AppError::Journal(JournalError::NotFound(id)) => assert_eq!(id, 7),
            _ => panic!("Expected AppError::Journal variant"),
        }
    }

    #[test]
    fn test_ai_error_conversion_to_app_error() {
        let app_error: AppError = AiError::CredentialMissing.into();

        match app_error {
            AppError::Ai(AiError::CredentialMissing) => {}
            _ => panic!("Expected AppError::Ai variant"),
        }
    }

    #[test]
    fn test_store_error_from_serde() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let store_error: StoreError = parse_err.into();

        assert!(format!("{}", store_error).contains("Serialization error"));
    }

    #[test]
    fn test_ai_error_source_chaining() {
        use std::error::Error;

        let parse_err = serde_json::from_str::<Vec<i32>>("nope").unwrap_err();
        let store_error = StoreError::Serialize(parse_err);
        assert!(store_error.source().is_some());

        // CredentialMissing carries no source
        assert!(AiError::CredentialMissing.source().is_none());
    }
}
