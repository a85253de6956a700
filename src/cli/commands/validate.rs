//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Redactor configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Marker: {}", config.redaction.marker);
        match config.redaction.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in"),
        }
        println!("  Audit Enabled: {}", config.redaction.audit.enabled);
        if config.redaction.audit.enabled {
            println!(
                "  Audit Log Path: {}",
                config.redaction.audit.log_path.display()
            );
        }
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[application]\nname = \"redactor\"\n")
            .unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_missing_config() {
        let args = ValidateArgs {};
        let code = args.execute("/no/such/config.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
