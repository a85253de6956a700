//! Redaction planner
//!
//! Maps unique literals back to locations in the host medium and replaces
//! every occurrence with the fixed marker, with a normalized fallback when the
//! document's formatting differs from what was captured.

use crate::domain::{LocateError, ReplaceError};
use crate::redaction::models::{RedactionAction, UniqueTargets};
use crate::redaction::report::RedactionReport;

/// Host-provided capability to find and replace literal text in the target
/// document medium
///
/// Searches are case-insensitive substring matches, not whole-word restricted.
/// Location handles are opaque to the planner and valid until the next
/// `replace` batch completes: replacing text can shift offsets, so the planner
/// finishes all replacements for one literal before locating the next.
pub trait Locator {
    /// Opaque handle to one located occurrence
    type Location;

    /// Find all occurrences of a literal (case-insensitive substring search)
    fn find_occurrences(&mut self, literal: &str) -> Result<Vec<Self::Location>, LocateError>;

    /// Replace one located occurrence with the marker text
    fn replace(&mut self, location: &Self::Location, marker: &str) -> Result<(), ReplaceError>;
}

/// Strips the separators the normalized locate fallback ignores
fn normalize_literal(literal: &str) -> String {
    literal.replace([' ', '-'], "")
}

/// Plans and applies redactions for a deduplicated target set
///
/// Strictly sequential per literal; a single literal's failure never aborts
/// the run. No rollback: whatever was applied before a host failure stands,
/// and the report reflects the counts actually achieved.
pub struct RedactionPlanner<'a> {
    marker: &'a str,
}

impl<'a> RedactionPlanner<'a> {
    /// Create a planner with the given marker text
    pub fn new(marker: &'a str) -> Self {
        Self { marker }
    }

    /// Locate and replace every unique literal, in insertion order
    pub fn apply<L: Locator>(
        &self,
        targets: &UniqueTargets,
        locator: &mut L,
        raw_finding_count: usize,
    ) -> RedactionReport {
        let mut report = RedactionReport::new(raw_finding_count);

        for target in targets {
            let mut used_fallback = false;

            let locations = match locator.find_occurrences(&target.text) {
                Ok(locations) => locations,
                Err(e) => {
                    tracing::warn!(
                        category = target.category.label(),
                        error = %e,
                        "Locate failed, skipping literal"
                    );
                    report.push_action(RedactionAction {
                        target_text: target.text.clone(),
                        locations_found: 0,
                        replaced: 0,
                        used_fallback: false,
                        category: target.category,
                    });
                    continue;
                }
            };

            // Formatting fallback: a phone captured as 555-123-4567 may appear
            // in the document as 5551234567.
            let locations = if locations.is_empty() && target.text.contains([' ', '-']) {
                let normalized = normalize_literal(&target.text);
                match locator.find_occurrences(&normalized) {
                    Ok(fallback_locations) => {
                        used_fallback = !fallback_locations.is_empty();
                        fallback_locations
                    }
                    Err(e) => {
                        tracing::warn!(
                            category = target.category.label(),
                            error = %e,
                            "Fallback locate failed, skipping literal"
                        );
                        Vec::new()
                    }
                }
            } else {
                locations
            };

            let locations_found = locations.len();
            let mut replaced = 0;

            // All occurrences of one literal are replaced as a batch before
            // the next literal is located. A mid-batch failure leaves the
            // already-applied replacements in place; counting stays
            // per-occurrence accurate.
            for location in &locations {
                match locator.replace(location, self.marker) {
                    Ok(()) => {
                        replaced += 1;
                        report.record_replacement(target.category);
                    }
                    Err(e) => {
                        tracing::warn!(
                            category = target.category.label(),
                            error = %e,
                            "Replace failed for one occurrence"
                        );
                    }
                }
            }

            report.push_action(RedactionAction {
                target_text: target.text.clone(),
                locations_found,
                replaced,
                used_fallback,
                category: target.category,
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::Category;

    /// Scripted locator for exercising planner policy without a document
    struct ScriptedLocator {
        /// (literal, occurrence count) pairs the "document" contains
        hits: Vec<(String, usize)>,
        /// literals whose locate step fails
        locate_failures: Vec<String>,
        /// replace calls that should fail (by 0-based global call index)
        failing_replacements: Vec<usize>,
        replace_calls: usize,
        searched: Vec<String>,
    }

    impl ScriptedLocator {
        fn new(hits: &[(&str, usize)]) -> Self {
            Self {
                hits: hits.iter().map(|(t, n)| (t.to_string(), *n)).collect(),
                locate_failures: Vec::new(),
                failing_replacements: Vec::new(),
                replace_calls: 0,
                searched: Vec::new(),
            }
        }
    }

    impl Locator for ScriptedLocator {
        type Location = usize;

        fn find_occurrences(&mut self, literal: &str) -> Result<Vec<usize>, LocateError> {
            self.searched.push(literal.to_string());
            if self.locate_failures.iter().any(|l| l == literal) {
                return Err(LocateError::SearchFailed("scripted failure".to_string()));
            }
            let count = self
                .hits
                .iter()
                .find(|(t, _)| t == literal)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            Ok((0..count).collect())
        }

        fn replace(&mut self, _location: &usize, _marker: &str) -> Result<(), ReplaceError> {
            let call = self.replace_calls;
            self.replace_calls += 1;
            if self.failing_replacements.contains(&call) {
                return Err(ReplaceError::WriteFailed("scripted failure".to_string()));
            }
            Ok(())
        }
    }

    fn targets(entries: &[(&str, Category)]) -> UniqueTargets {
        let mut t = UniqueTargets::new();
        for (text, category) in entries {
            t.insert(text, *category);
        }
        t
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let t = targets(&[("a@example.com", Category::Email)]);
        let mut locator = ScriptedLocator::new(&[("a@example.com", 3)]);

        let report = RedactionPlanner::new("X").apply(&t, &mut locator, 3);
        assert_eq!(report.total_redactions, 3);
        assert_eq!(report.counts_by_category.get(&Category::Email), Some(&3));
        assert_eq!(report.actions[0].locations_found, 3);
        assert!(!report.actions[0].used_fallback);
    }

    #[test]
    fn test_normalized_fallback() {
        let t = targets(&[("123-456-7890", Category::Phone)]);
        // Document only contains the unformatted digits.
        let mut locator = ScriptedLocator::new(&[("1234567890", 1)]);

        let report = RedactionPlanner::new("X").apply(&t, &mut locator, 1);
        assert_eq!(report.total_redactions, 1);
        assert!(report.actions[0].used_fallback);
        assert_eq!(
            locator.searched,
            vec!["123-456-7890".to_string(), "1234567890".to_string()]
        );
    }

    #[test]
    fn test_no_fallback_without_separator() {
        let t = targets(&[("1234", Category::SsnLastFour)]);
        let mut locator = ScriptedLocator::new(&[]);

        let report = RedactionPlanner::new("X").apply(&t, &mut locator, 1);
        assert_eq!(report.total_redactions, 0);
        // Only one search: the literal has no space or hyphen to strip.
        assert_eq!(locator.searched.len(), 1);
    }

    #[test]
    fn test_locate_failure_skips_literal_only() {
        let t = targets(&[
            ("bad@example.com", Category::Email),
            ("MRN-42", Category::MedicalRecordNumber),
        ]);
        let mut locator = ScriptedLocator::new(&[("MRN-42", 1)]);
        locator.locate_failures.push("bad@example.com".to_string());

        let report = RedactionPlanner::new("X").apply(&t, &mut locator, 2);
        assert_eq!(report.total_redactions, 1);
        assert_eq!(
            report
                .counts_by_category
                .get(&Category::MedicalRecordNumber),
            Some(&1)
        );
        assert_eq!(report.actions.len(), 2);
        assert_eq!(report.actions[0].locations_found, 0);
    }

    #[test]
    fn test_mid_batch_replace_failure_keeps_earlier_counts() {
        let t = targets(&[("card", Category::CreditCard)]);
        let mut locator = ScriptedLocator::new(&[("card", 3)]);
        locator.failing_replacements.push(1);

        let report = RedactionPlanner::new("X").apply(&t, &mut locator, 3);
        // First and third occurrences stand; counting is per occurrence.
        assert_eq!(report.total_redactions, 2);
        assert_eq!(report.actions[0].locations_found, 3);
        assert_eq!(report.actions[0].replaced, 2);
    }

    #[test]
    fn test_zero_locations_everywhere() {
        let t = targets(&[("a@example.com", Category::Email)]);
        let mut locator = ScriptedLocator::new(&[]);

        let report = RedactionPlanner::new("X").apply(&t, &mut locator, 5);
        assert_eq!(report.total_redactions, 0);
        assert_eq!(report.total_raw_findings, 5);
        assert!(report.localization_failed());
    }
}
