//! Configuration management for Redactor.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Redactor uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `REDACTOR_*` environment variable overrides
//! - Comprehensive validation
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "redactor"
//! log_level = "info"
//!
//! [redaction]
//! marker = "████ REDACTED ████"
//! # pattern_library = "patterns/custom.toml"
//!
//! [redaction.audit]
//! enabled = true
//! log_path = "./audit/redactions.log"
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use redactor::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("redactor.toml")?;
//! println!("Marker: {}", config.redaction.marker);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, LoggingConfig, RedactorConfig};
