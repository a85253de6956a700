//! Result type alias for Redactor

use super::errors::RedactorError;

/// Result alias used by fallible Redactor operations
///
/// # Examples
///
/// ```
/// use redactor::domain::result::Result;
/// use redactor::domain::errors::RedactorError;
///
/// fn load_marker(raw: &str) -> Result<String> {
///     if raw.is_empty() {
///         return Err(RedactorError::Configuration("missing marker".to_string()));
///     }
///     Ok(raw.to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedactorError>;
