//! Runs every detector over the document text and collects findings

use crate::redaction::detector::{Detector, PatternRegistry};
use crate::redaction::models::Finding;

/// Matcher over a pattern registry
///
/// Output order is registry order, then match order within each detector.
/// Duplicates are allowed; deduplication happens downstream. Scanning is
/// idempotent: detectors hold no cursor, so repeated runs over the same text
/// produce identical findings.
pub struct Matcher<'a> {
    registry: &'a PatternRegistry,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over a registry
    pub fn new(registry: &'a PatternRegistry) -> Self {
        Self { registry }
    }

    /// Scan the full document text with every detector
    ///
    /// A detector whose configured capture group is absent from a match is a
    /// rule defect, not a run failure: the match is dropped with a warning and
    /// the remaining detectors still run.
    pub fn find_all(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for detector in self.registry.detectors() {
            self.scan_with(detector, text, &mut findings);
        }

        findings
    }

    fn scan_with(&self, detector: &Detector, text: &str, findings: &mut Vec<Finding>) {
        for caps in detector.regex.captures_iter(text) {
            match caps.get(detector.capture_group) {
                Some(matched) => {
                    findings.push(Finding::new(matched.as_str(), detector.category));
                }
                None => {
                    tracing::warn!(
                        detector = %detector.name,
                        capture_group = detector.capture_group,
                        "Detector matched but capture group is absent, dropping match"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::Category;

    fn matches_of(text: &str) -> Vec<Finding> {
        let registry = PatternRegistry::builtin().unwrap();
        Matcher::new(&registry).find_all(text)
    }

    #[test]
    fn test_clean_text_has_no_findings() {
        let findings = matches_of("Nothing sensitive in this sentence at all.");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_registry_order_then_match_order() {
        let findings = matches_of(
            "Call 555-123-4567 about jane@example.com or bob@example.com.",
        );

        // Email detector runs before phone, and emails keep text order.
        let categories: Vec<Category> = findings.iter().map(|f| f.category).collect();
        assert_eq!(
            categories,
            vec![Category::Email, Category::Email, Category::Phone]
        );
        assert_eq!(findings[0].text, "jane@example.com");
        assert_eq!(findings[1].text, "bob@example.com");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let findings = matches_of("MRN-100 then later MRN-100 again");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].text, findings[1].text);
    }

    #[test]
    fn test_contextual_capture_yields_digits_only() {
        let findings = matches_of("SSN on file are 1234.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "1234");
        assert_eq!(findings[0].category, Category::SsnLastFour);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let registry = PatternRegistry::builtin().unwrap();
        let matcher = Matcher::new(&registry);
        let text = "Contact test@example.com, SSN 123-45-6789, card 4111 1111 1111 1111.";

        let first = matcher.find_all(text);
        let second = matcher.find_all(text);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
