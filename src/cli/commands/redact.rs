//! Redact command implementation
//!
//! This module implements the `redact` command: detect PII in a plain-text
//! file, replace every located occurrence with the marker, and print the
//! categorized report.

use crate::adapters::text::PlainTextDocument;
use crate::redaction::RedactionEngine;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Banner prepended to documents that had at least one redaction applied
const CONFIDENTIAL_HEADER: &str = "CONFIDENTIAL DOCUMENT";

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input text file to redact
    pub input: PathBuf,

    /// Where to write the redacted document (defaults to in-place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured redaction marker
    #[arg(long)]
    pub marker: Option<String>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Skip the CONFIDENTIAL DOCUMENT header
    #[arg(long)]
    pub no_header: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting redaction");

        let mut config = match super::load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        if let Some(ref marker) = self.marker {
            config.redaction.marker = marker.clone();
        }

        let engine = RedactionEngine::new(config.redaction)?;

        let text = match fs::read_to_string(&self.input) {
            Ok(text) => text,
            Err(e) => {
                println!("❌ Failed to read input file: {}", self.input.display());
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        let outcome = engine.detect_and_plan(&text);
        let mut document = PlainTextDocument::new(text);
        let report = engine.apply_redactions(&outcome, &mut document)?;

        if report.total_redactions > 0 && !self.no_header {
            document.insert_header(CONFIDENTIAL_HEADER);
        }

        let output_path = self.output.as_ref().unwrap_or(&self.input);
        fs::write(output_path, document.text())?;

        println!("{}", report.format_console());
        println!("📄 Redacted document written to {}", output_path.display());

        if let Some(ref report_path) = self.report {
            report.write_to_file(report_path)?;
            println!("🧾 JSON report written to {}", report_path.display());
        }

        Ok(0)
    }
}
