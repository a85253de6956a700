//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod redact;
pub mod scan;
pub mod validate;

use crate::config::{load_config, RedactorConfig};

/// Load the configuration file, falling back to defaults when it is absent
///
/// An explicit but broken config file is still an error; only a missing file
/// falls back, so `redactor redact file.txt` works out of the box.
pub(crate) fn load_or_default(config_path: &str) -> anyhow::Result<RedactorConfig> {
    if std::path::Path::new(config_path).exists() {
        Ok(load_config(config_path)?)
    } else {
        tracing::debug!(config_path, "No configuration file, using defaults");
        Ok(RedactorConfig::default())
    }
}
