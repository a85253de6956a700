//! Core data models for detection and redaction planning

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed replacement text substituted for every redacted occurrence.
///
/// The marker is category-agnostic: which category a literal belonged to is
/// tracked only in the report, never embedded in the document.
pub const DEFAULT_MARKER: &str = "████ REDACTED ████";

/// Sensitive data category
///
/// Closed, fixed set. Enum order is not significant; detector evaluation order
/// is owned by the pattern registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// Social Security Numbers (###-##-####)
    Ssn,
    /// Credit card numbers (16 digits in groups of 4)
    CreditCard,
    /// Dates of birth (D/M/Y or D-M-Y)
    DateOfBirth,
    /// Medical Record Numbers (MRN-prefixed)
    MedicalRecordNumber,
    /// Insurance numbers (INS-prefixed)
    InsuranceNumber,
    /// Employee IDs (EMP-prefixed)
    EmployeeId,
    /// Street addresses
    Address,
    /// Last four digits of an SSN quoted in running text
    SsnLastFour,
}

impl Category {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Addresses",
            Self::Phone => "Phone Numbers",
            Self::Ssn => "Social Security Numbers",
            Self::CreditCard => "Credit Card Numbers",
            Self::DateOfBirth => "Dates of Birth",
            Self::MedicalRecordNumber => "Medical Record Numbers",
            Self::InsuranceNumber => "Insurance Numbers",
            Self::EmployeeId => "Employee IDs",
            Self::Address => "Addresses",
            Self::SsnLastFour => "SSN Last 4 Digits",
        }
    }

    /// Parse a category name as written in a pattern library file
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Some(Self::Email),
            "PHONE" => Some(Self::Phone),
            "SSN" => Some(Self::Ssn),
            "CREDIT_CARD" | "CC" => Some(Self::CreditCard),
            "DATE_OF_BIRTH" | "DOB" => Some(Self::DateOfBirth),
            "MEDICAL_RECORD_NUMBER" | "MRN" => Some(Self::MedicalRecordNumber),
            "INSURANCE_NUMBER" | "INS" => Some(Self::InsuranceNumber),
            "EMPLOYEE_ID" | "EMP" => Some(Self::EmployeeId),
            "ADDRESS" => Some(Self::Address),
            "SSN_LAST_FOUR" | "SSN_LAST_4" => Some(Self::SsnLastFour),
            _ => None,
        }
    }
}

/// One raw match of a detector against the document text
///
/// Multiple findings may share the same literal, across categories or within
/// one category. The first finding for a literal wins for categorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The literal matched string (the capture group for contextual patterns)
    pub text: String,
    /// Category of the detector that produced this finding
    pub category: Category,
}

impl Finding {
    /// Create a new finding
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// A deduplicated literal slated for redaction, with its resolved category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueTarget {
    /// Distinct literal string to locate in the host medium
    pub text: String,
    /// First-seen category for this literal
    pub category: Category,
}

/// Ordered mapping from distinct literal string to its first-seen category
///
/// Insertion order is discovery order across all detectors in registry order.
/// One category per literal: later findings for a known literal are ignored,
/// even if another detector would classify the same literal differently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniqueTargets {
    targets: Vec<UniqueTarget>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl UniqueTargets {
    /// Create an empty target set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the target set from findings in discovery order, first-seen wins
    pub fn from_findings<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut targets = Self::new();
        for finding in findings {
            targets.insert(&finding.text, finding.category);
        }
        targets
    }

    /// Insert a literal if it has not been seen yet; returns true if inserted
    pub fn insert(&mut self, text: &str, category: Category) -> bool {
        if self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.to_string());
        self.targets.push(UniqueTarget {
            text: text.to_string(),
            category,
        });
        true
    }

    /// Resolved category for a literal, if present
    pub fn category_of(&self, text: &str) -> Option<Category> {
        self.targets
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.category)
    }

    /// Iterate targets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &UniqueTarget> {
        self.targets.iter()
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if no literals were collected
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<'a> IntoIterator for &'a UniqueTargets {
    type Item = &'a UniqueTarget;
    type IntoIter = std::slice::Iter<'a, UniqueTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

/// Result of the pure detection phase
///
/// `raw_finding_count` is the pre-dedupe match total, kept for diagnostic
/// display: a run that detects plenty but redacts nothing points at the
/// locate step, not at detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionOutcome {
    /// Deduplicated literals in discovery order
    pub unique_targets: UniqueTargets,
    /// Total raw findings before deduplication
    pub raw_finding_count: usize,
}

impl DetectionOutcome {
    /// Check if any targets were found
    pub fn has_targets(&self) -> bool {
        !self.unique_targets.is_empty()
    }
}

/// The decided outcome of trying to locate one literal in the host medium
///
/// Transient per run; actions are reported, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionAction {
    /// The literal the planner searched for
    pub target_text: String,
    /// Number of occurrences located (after fallback, if it was used)
    pub locations_found: usize,
    /// Number of occurrences actually replaced
    pub replaced: usize,
    /// Whether the normalized (spaces/hyphens stripped) fallback matched
    pub used_fallback: bool,
    /// Resolved category of the literal
    pub category: Category,
}
