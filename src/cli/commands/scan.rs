//! Scan command implementation
//!
//! This module implements the `scan` command: detection only, nothing in the
//! document is touched. Useful for checking what a redaction run would target.

use crate::redaction::RedactionEngine;
use clap::Args;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input text file to scan
    pub input: PathBuf,

    /// Print the matched literals (plaintext PII on your terminal)
    #[arg(long)]
    pub show_values: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Scanning for PII");

        let config = match super::load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

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

        println!("🔍 Scan of {}", self.input.display());
        println!();
        println!("  Raw pattern matches:   {}", outcome.raw_finding_count);
        println!("  Unique targets:        {}", outcome.unique_targets.len());

        if outcome.has_targets() {
            let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
            for target in &outcome.unique_targets {
                *by_category.entry(target.category.label()).or_insert(0) += 1;
            }

            println!();
            for (label, count) in by_category {
                println!("  • {label:26} {count:>5}");
            }

            if self.show_values {
                println!();
                for target in &outcome.unique_targets {
                    println!("  {:26} {}", target.category.label(), target.text);
                }
            }
        } else {
            println!();
            println!("  No sensitive information detected.");
        }

        Ok(0)
    }
}
