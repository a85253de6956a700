//! Audit logger for redaction runs

use crate::redaction::report::RedactionReport;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one redaction run
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    run_id: String,
    total_raw_findings: usize,
    total_redactions: usize,
    literals: Vec<AuditLiteral>,
}

/// Audit entry for one unique literal (with hashed value)
#[derive(Debug, Serialize)]
struct AuditLiteral {
    category: String,
    /// SHA-256 hash of the literal (never log plaintext PII)
    value_hash: String,
    locations_found: usize,
    replaced: usize,
    used_fallback: bool,
}

/// Audit logger for redaction runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            // Ensure parent directory exists
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a completed redaction run
    pub fn log_run(&self, report: &RedactionReport) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: report.timestamp.to_rfc3339(),
            run_id: report.run_id.to_string(),
            total_raw_findings: report.total_raw_findings,
            total_redactions: report.total_redactions,
            literals: report
                .actions
                .iter()
                .map(|action| AuditLiteral {
                    category: action.category.label().to_string(),
                    value_hash: hash_literal(&action.target_text),
                    locations_found: action.locations_found,
                    replaced: action.replaced,
                    used_fallback: action.used_fallback,
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            // Plain text format
            writeln!(
                file,
                "[{}] Run: {} | Raw matches: {} | Redactions: {}",
                entry.timestamp, entry.run_id, entry.total_raw_findings, entry.total_redactions
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a literal value using SHA-256
fn hash_literal(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
