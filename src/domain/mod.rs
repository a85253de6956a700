//! Domain types for Redactor.
//!
//! This module contains the error hierarchy and result alias shared by the
//! rest of the crate.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Error types** ([`RedactorError`], [`LocateError`], [`ReplaceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, RedactorError>`]:
//!
//! ```rust
//! use redactor::domain::{RedactorError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = redactor::config::load_config("redactor.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{LocateError, RedactorError, ReplaceError};
pub use result::Result;
