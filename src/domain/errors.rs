//! Domain error types
//!
//! This module defines the error hierarchy for Redactor. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Redactor error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum RedactorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern compilation or library errors
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Locate step failures (host-side search)
    #[error("Locate error: {0}")]
    Locate(#[from] LocateError),

    /// Replace step failures (host-side mutation)
    #[error("Replace error: {0}")]
    Replace(#[from] ReplaceError),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors from the host-side locate step
///
/// A locate failure is scoped to one literal: the planner logs it, skips the
/// literal, and continues with the rest of the run.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The host search itself failed
    #[error("search failed: {0}")]
    SearchFailed(String),

    /// The host document is gone or unreadable
    #[error("document unavailable: {0}")]
    DocumentUnavailable(String),
}

/// Errors from the host-side replace step
///
/// A replace failure is scoped to one occurrence: replacements already applied
/// for the same literal stand, and counting stays per-occurrence accurate.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// The location handle no longer maps to a valid range
    #[error("invalid range: {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    /// The location handle was issued before the last mutation batch
    #[error("stale location handle")]
    StaleLocation,

    /// The host write failed
    #[error("write failed: {0}")]
    WriteFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedactorError {
    fn from(err: std::io::Error) -> Self {
        RedactorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedactorError {
    fn from(err: serde_json::Error) -> Self {
        RedactorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedactorError {
    fn from(err: toml::de::Error) -> Self {
        RedactorError::Configuration(format!("TOML parse error: {err}"))
    }
}
