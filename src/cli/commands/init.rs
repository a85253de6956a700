//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "redactor.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

const CONFIG_TEMPLATE: &str = r#"# Redactor configuration

[application]
name = "redactor"
# trace, debug, info, warn, error
log_level = "info"

[redaction]
# Replacement text for every redacted occurrence
marker = "████ REDACTED ████"
# Custom detector rules (ordered [[patterns]] tables); built-ins when unset
# pattern_library = "patterns/custom.toml"

[redaction.audit]
# Append-only log of redaction runs with SHA-256 hashed values
enabled = false
log_path = "./audit/redactions.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
# daily or hourly
local_rotation = "daily"
"#;

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Redactor configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        fs::write(&self.output, CONFIG_TEMPLATE)?;

        println!("✅ Configuration file created: {}", self.output);
        println!("   Edit it and run: redactor redact <file>");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_creates_parseable_config() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("redactor.toml");

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);

        let config = crate::config::load_config(&output).unwrap();
        assert_eq!(config.application.name, "redactor");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("redactor.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }
}
