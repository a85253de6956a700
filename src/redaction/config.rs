//! Redaction configuration

use crate::redaction::models::DEFAULT_MARKER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Redaction engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Replacement text substituted for every redacted occurrence
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Path to a custom pattern library TOML file (built-ins when unset)
    pub pattern_library: Option<PathBuf>,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            pattern_library: None,
            audit: AuditConfig::default(),
        }
    }
}

impl RedactionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            anyhow::bail!("Redaction marker must not be empty");
        }

        // Validate pattern library path if specified
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                anyhow::bail!("Pattern library file not found: {}", path.display());
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                anyhow::bail!("Pattern library must be a TOML file: {}", path.display());
            }
        }

        self.audit
            .validate()
            .context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("REDACTOR_MARKER") {
            self.marker = val;
        }

        if let Ok(val) = std::env::var("REDACTOR_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    false
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/redactions.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("REDACTOR_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid REDACTOR_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("REDACTOR_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("REDACTOR_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid REDACTOR_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RedactionConfig::default();
        assert_eq!(config.marker, DEFAULT_MARKER);
        assert!(config.pattern_library.is_none());
        assert!(!config.audit.enabled);
        assert!(config.audit.json_format);
    }

    #[test]
    fn test_config_validation() {
        let config = RedactionConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let config = RedactionConfig {
            marker: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_pattern_library_rejected() {
        let config = RedactionConfig {
            pattern_library: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
