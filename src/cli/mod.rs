//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Redactor - PII detection and redaction for document text
#[derive(Parser, Debug)]
#[command(name = "redactor", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "redactor.toml", env = "REDACTOR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REDACTOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect and redact PII in a text document
    Redact(commands::redact::RedactArgs),

    /// Detect PII without modifying the document (dry run)
    Scan(commands::scan::ScanArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
