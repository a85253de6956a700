//! # Redactor - PII detection and redaction planning
//!
//! Redactor identifies personally identifiable and sensitive information in
//! free-form document text, replaces each finding with a fixed redaction
//! marker, and reports a categorized summary of what was removed.
//!
//! Detection is deliberately pattern-based: deterministic, explainable rules
//! rather than statistical NER. The engine operates on a flattened text view
//! and never touches document storage itself; hosts supply a
//! [`Locator`](redaction::planner::Locator) capability for locating and
//! replacing literal text in their medium.
//!
//! ## Architecture
//!
//! Redactor follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`redaction`] - Core pipeline (pattern registry, matcher, deduplication,
//!   planner, reporting, audit)
//! - [`adapters`] - Host collaborators (plain-text documents)
//! - [`domain`] - Error types and result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Pipeline
//!
//! Data flows one way: raw text → matcher (over the ordered pattern registry)
//! → deduplication (first-seen category wins per literal) → redaction planner
//! (locate with normalized fallback, replace every occurrence) → report.
//!
//! ## Quick Start
//!
//! ```rust
//! use redactor::adapters::text::PlainTextDocument;
//! use redactor::redaction::{config::RedactionConfig, RedactionEngine};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = RedactionEngine::new(RedactionConfig::default())?;
//!
//!     let text = "Contact jane@example.com or call 555-123-4567.";
//!     let outcome = engine.detect_and_plan(text);
//!
//!     let mut document = PlainTextDocument::new(text);
//!     let report = engine.apply_redactions(&outcome, &mut document)?;
//!
//!     println!("{}", report.format_console());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failures scoped to a single literal (a locate or replace error) are logged
//! and skipped; the run continues and the final report always reflects the
//! actually applied state. Domain errors use [`domain::RedactorError`].
//!
//! ## Logging
//!
//! Redactor uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting redaction");
//! warn!(category = "Phone Numbers", "Locate failed, skipping literal");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod redaction;
