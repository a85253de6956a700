//! Redaction run reporting
//!
//! This module provides the categorized accounting for a redaction run: how
//! many occurrences were replaced, per category, plus the raw match count as
//! a diagnostic signal.

use crate::redaction::models::{Category, RedactionAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Categorized summary of one redaction run
///
/// Counts are per replaced occurrence, not per unique literal: a literal found
/// 3 times in the document contributes 3 to its category's count. Built
/// incrementally as replacements succeed, so a partially applied run still
/// reports exactly what was achieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Identifier for this run
    pub run_id: Uuid,

    /// When the run started
    pub timestamp: DateTime<Utc>,

    /// Total raw findings before deduplication (diagnostic)
    pub total_raw_findings: usize,

    /// Total occurrences replaced across all literals
    pub total_redactions: usize,

    /// Replaced occurrences by category
    pub counts_by_category: HashMap<Category, usize>,

    /// Per-literal outcomes, in planning order
    pub actions: Vec<RedactionAction>,
}

impl RedactionReport {
    /// Create an empty report for a run with the given raw finding count
    pub fn new(total_raw_findings: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            total_raw_findings,
            total_redactions: 0,
            counts_by_category: HashMap::new(),
            actions: Vec::new(),
        }
    }

    /// Count one successfully replaced occurrence
    pub fn record_replacement(&mut self, category: Category) {
        self.total_redactions += 1;
        *self.counts_by_category.entry(category).or_insert(0) += 1;
    }

    /// Record the decided outcome for one literal
    pub fn push_action(&mut self, action: RedactionAction) {
        self.actions.push(action);
    }

    /// True if detection fired but nothing was localized
    ///
    /// Points at the locate step, not at detection.
    pub fn localization_failed(&self) -> bool {
        self.total_redactions == 0 && self.total_raw_findings > 0
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                       REDACTION REPORT                        \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        if self.total_redactions == 0 {
            output.push_str(&format!(
                "  No sensitive information found. ({} raw pattern matches)\n",
                self.total_raw_findings
            ));
            if self.localization_failed() {
                output.push_str(
                    "  Matches were detected but none could be located in the document.\n",
                );
            }
        } else {
            output.push_str(&format!(
                "  Redaction complete. {} items redacted:\n\n",
                self.total_redactions
            ));

            let mut categories: Vec<_> = self.counts_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1).then(a.0.label().cmp(b.0.label())));

            for (category, count) in categories {
                output.push_str(&format!("  • {:26} {:>5}\n", category.label(), count));
            }

            output.push('\n');
            output.push_str(&format!(
                "  Raw pattern matches (pre-dedupe): {}\n",
                self.total_raw_findings
            ));
        }

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}
