//! Detector rules and the ordered pattern registry

use crate::redaction::models::Category;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// An immutable classification rule over text
///
/// A detector is constructed once and holds no scan state: `regex::Regex`
/// keeps no cursor between calls, so reapplying a detector to the same text
/// yields the same matches every time.
#[derive(Debug, Clone)]
pub struct Detector {
    /// Short name, used in logs when a rule misbehaves
    pub name: String,
    /// Category tag attached to every match
    pub category: Category,
    /// Compiled recognizer
    pub regex: Regex,
    /// Which capture group is the literal to redact (0 = whole match)
    ///
    /// Contextual rules capture a sub-group: for the SSN-last-4 rule the four
    /// digits alone are the redaction target, not the surrounding phrase.
    pub capture_group: usize,
}

impl Detector {
    fn new(name: &str, category: Category, pattern: &str, capture_group: usize) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid regex in detector '{name}': {pattern}"))?;
        Ok(Self {
            name: name.to_string(),
            category,
            regex,
            capture_group,
        })
    }
}

/// Pattern definition from a TOML library file
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Detector name
    pub name: String,
    /// Category label (e.g. "EMAIL", "SSN_LAST_4")
    pub category: String,
    /// Regex pattern
    pub regex: String,
    /// Capture group holding the redaction target (default: whole match)
    #[serde(default)]
    pub capture_group: usize,
}

/// Pattern library container
///
/// An array of tables rather than a named map: registry order is evaluation
/// order, and a TOML map would not preserve it.
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: Vec<PatternDefinition>,
}

/// Ordered registry of detectors
///
/// Evaluation order is construction order. The registry is immutable after
/// construction; a fresh registry per engine keeps runs independent.
pub struct PatternRegistry {
    detectors: Vec<Detector>,
}

impl PatternRegistry {
    /// Create the registry of built-in detectors
    ///
    /// Registry order resolves category collisions: when one literal is
    /// matched by two rules, the earlier rule's category wins.
    pub fn builtin() -> Result<Self> {
        let detectors = vec![
            Detector::new(
                "email",
                Category::Email,
                r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b",
                0,
            )?,
            Detector::new(
                "phone",
                Category::Phone,
                r"\b(?:\+?\d{1,3}[\s-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b",
                0,
            )?,
            Detector::new("ssn", Category::Ssn, r"\b\d{3}-\d{2}-\d{4}\b", 0)?,
            Detector::new(
                "credit_card",
                Category::CreditCard,
                r"\b\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}\b",
                0,
            )?,
            Detector::new(
                "date_of_birth",
                Category::DateOfBirth,
                r"\b(?:0?[1-9]|1[0-2])[/-](?:0?[1-9]|[12][0-9]|3[01])[/-](?:19|20)\d{2}\b",
                0,
            )?,
            Detector::new(
                "medical_record_number",
                Category::MedicalRecordNumber,
                r"(?i)\bMRN[- ]?\d+\b",
                0,
            )?,
            Detector::new(
                "insurance_number",
                Category::InsuranceNumber,
                r"(?i)\bINS[- ]?\d+\b",
                0,
            )?,
            Detector::new(
                "employee_id",
                Category::EmployeeId,
                r"(?i)\bEMP[- ][A-Z0-9-]+\b",
                0,
            )?,
            Detector::new(
                "address",
                Category::Address,
                r"\b\d+\s+[A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*\s+(?i:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Court|Ct|Way|Circle|Cir|Place|Pl|Terrace)\b",
                0,
            )?,
            Detector::new(
                "ssn_last_four",
                Category::SsnLastFour,
                r"(?i)\b(?:last\s+four|on\s+file|are|is)\s+(?:digits?\s+(?:of\s+the\s+)?(?:social\s+security\s+number\s+)?)?(\d{4})\b",
                1,
            )?,
        ];

        Ok(Self { detectors })
    }

    /// Create a pattern registry from a TOML library file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    ///
    /// File order becomes registry order.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        if library.patterns.is_empty() {
            anyhow::bail!("Pattern library contains no patterns");
        }

        let mut detectors = Vec::with_capacity(library.patterns.len());
        for def in &library.patterns {
            let category = Category::parse(&def.category).with_context(|| {
                format!("Unknown category in pattern '{}': {}", def.name, def.category)
            })?;
            detectors.push(Detector::new(
                &def.name,
                category,
                &def.regex,
                def.capture_group,
            )?);
        }

        Ok(Self { detectors })
    }

    /// All detectors in evaluation order
    pub fn detectors(&self) -> &[Detector] {
        &self.detectors
    }
}
