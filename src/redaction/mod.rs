//! Redaction module for Redactor
//!
//! This module provides PII detection and redaction planning over free-form
//! document text. Raw text flows one way through the pipeline:
//! text → matcher (over the pattern registry) → deduplication → planner →
//! report. Applying the planned replacements is the host collaborator's job,
//! reached through the [`planner::Locator`] capability.
//!
//! # Usage
//!
//! ```rust,ignore
//! use redactor::redaction::{RedactionEngine, config::RedactionConfig};
//!
//! let engine = RedactionEngine::new(RedactionConfig::default())?;
//! let outcome = engine.detect_and_plan(document_text);
//! let report = engine.apply_redactions(&outcome, &mut locator)?;
//! ```

pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod matcher;
pub mod models;
pub mod planner;
pub mod report;

// Re-export main types
pub use config::RedactionConfig;
pub use engine::RedactionEngine;
pub use models::{Category, DetectionOutcome, Finding, UniqueTargets, DEFAULT_MARKER};
pub use planner::Locator;
pub use report::RedactionReport;
