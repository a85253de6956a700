//! Main redaction engine
//!
//! This module provides the core [`RedactionEngine`] that orchestrates PII
//! detection, redaction planning, and audit logging over free-form document
//! text.
//!
//! # Architecture
//!
//! The engine coordinates the pipeline components:
//! - **Matcher**: runs every registered detector over the text
//! - **Deduplicator**: collapses findings to unique literals, first-seen wins
//! - **Planner**: locates each literal via the host [`Locator`] and replaces
//!   every occurrence with the fixed marker
//! - **Audit Logger**: records run outcomes with hashed values
//!
//! # Examples
//!
//! ```
//! use redactor::redaction::{RedactionEngine, config::RedactionConfig};
//! use redactor::adapters::text::PlainTextDocument;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(RedactionConfig::default())?;
//!
//! let outcome = engine.detect_and_plan("Contact jane@example.com today.");
//! assert_eq!(outcome.unique_targets.len(), 1);
//!
//! let mut document = PlainTextDocument::new("Contact jane@example.com today.");
//! let report = engine.apply_redactions(&outcome, &mut document)?;
//! assert_eq!(report.total_redactions, 1);
//! # Ok(())
//! # }
//! ```

use crate::redaction::{
    audit::AuditLogger,
    config::RedactionConfig,
    detector::PatternRegistry,
    matcher::Matcher,
    models::{DetectionOutcome, UniqueTargets},
    planner::{Locator, RedactionPlanner},
    report::RedactionReport,
};
use anyhow::{Context, Result};
use std::time::Instant;

/// Main redaction engine
///
/// All state is built at construction and immutable afterwards: the registry
/// carries no scan cursors, so concurrent or repeated runs over the same
/// engine cannot interfere with each other.
pub struct RedactionEngine {
    config: RedactionConfig,
    registry: PatternRegistry,
    audit_logger: Option<AuditLogger>,
}

impl RedactionEngine {
    /// Create a new redaction engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library file cannot be loaded or compiled
    /// - Audit logger initialization fails
    pub fn new(config: RedactionConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid redaction configuration")?;

        let registry = if let Some(ref pattern_path) = config.pattern_library {
            PatternRegistry::from_file(pattern_path)?
        } else {
            PatternRegistry::builtin()?
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            registry,
            audit_logger,
        })
    }

    /// Classify the document text into deduplicated redaction targets
    ///
    /// Pure function over the text: no I/O, no retained state, identical
    /// ordered results on every call. Findings are collected in registry
    /// order then match order; the first finding for a literal decides its
    /// category.
    pub fn detect_and_plan(&self, document_text: &str) -> DetectionOutcome {
        let start = Instant::now();

        let findings = Matcher::new(&self.registry).find_all(document_text);
        let raw_finding_count = findings.len();
        let unique_targets = UniqueTargets::from_findings(&findings);

        tracing::debug!(
            raw_findings = raw_finding_count,
            unique_targets = unique_targets.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Detection complete"
        );

        DetectionOutcome {
            unique_targets,
            raw_finding_count,
        }
    }

    /// Locate and replace every detected literal through the host locator
    ///
    /// Sequential per literal: each literal's locate and replace completes
    /// before the next literal is processed, since replacements can shift
    /// locations a batched locate would rely on. Single-literal failures are
    /// logged and skipped; the returned report reflects exactly what was
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns an error only if audit logging of the completed run fails.
    pub fn apply_redactions<L: Locator>(
        &self,
        outcome: &DetectionOutcome,
        locator: &mut L,
    ) -> Result<RedactionReport> {
        let planner = RedactionPlanner::new(&self.config.marker);
        let report = planner.apply(&outcome.unique_targets, locator, outcome.raw_finding_count);

        tracing::info!(
            run_id = %report.run_id,
            total_redactions = report.total_redactions,
            raw_findings = report.total_raw_findings,
            "Redaction run complete"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_run(&report).context("Audit logging failed")?;
        }

        Ok(report)
    }

    /// The marker text this engine substitutes for redacted occurrences
    pub fn marker(&self) -> &str {
        &self.config.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::text::PlainTextDocument;
    use crate::redaction::models::Category;

    #[test]
    fn test_engine_creation() {
        let engine = RedactionEngine::new(RedactionConfig::default());
        assert!(engine.is_ok());
    }

    #[test]
    fn test_detect_and_plan_clean_text() {
        let engine = RedactionEngine::new(RedactionConfig::default()).unwrap();
        let outcome = engine.detect_and_plan("Just an ordinary sentence.");
        assert!(!outcome.has_targets());
        assert_eq!(outcome.raw_finding_count, 0);
    }

    #[test]
    fn test_detect_and_plan_is_idempotent() {
        let engine = RedactionEngine::new(RedactionConfig::default()).unwrap();
        let text = "Email a@example.com, SSN 123-45-6789, MRN-7 and MRN-7.";

        let first = engine.detect_and_plan(text);
        let second = engine.detect_and_plan(text);

        assert_eq!(first.raw_finding_count, second.raw_finding_count);
        let first_texts: Vec<_> = first.unique_targets.iter().map(|t| &t.text).collect();
        let second_texts: Vec<_> = second.unique_targets.iter().map(|t| &t.text).collect();
        assert_eq!(first_texts, second_texts);
    }

    #[test]
    fn test_dedup_bound() {
        let engine = RedactionEngine::new(RedactionConfig::default()).unwrap();
        let outcome = engine.detect_and_plan("MRN-1 MRN-1 MRN-1 and INS-2");
        assert!(outcome.unique_targets.len() <= outcome.raw_finding_count);
        assert_eq!(outcome.unique_targets.len(), 2);
        assert_eq!(outcome.raw_finding_count, 4);
    }

    #[test]
    fn test_end_to_end_replacement() {
        let engine = RedactionEngine::new(RedactionConfig::default()).unwrap();
        let text = "Contact support@example.com or call 555-123-4567.";

        let outcome = engine.detect_and_plan(text);
        assert_eq!(outcome.unique_targets.len(), 2);

        let mut document = PlainTextDocument::new(text);
        let report = engine.apply_redactions(&outcome, &mut document).unwrap();

        assert_eq!(report.total_redactions, 2);
        assert_eq!(report.counts_by_category.get(&Category::Email), Some(&1));
        assert_eq!(report.counts_by_category.get(&Category::Phone), Some(&1));
        assert!(!document.text().contains("support@example.com"));
        assert!(!document.text().contains("555-123-4567"));
        assert!(document.text().contains(engine.marker()));
    }
}
