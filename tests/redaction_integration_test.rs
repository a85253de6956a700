//! End-to-end redaction tests against a plain-text document

use redactor::adapters::text::PlainTextDocument;
use redactor::redaction::{
    config::RedactionConfig, Category, RedactionEngine, DEFAULT_MARKER,
};

fn engine() -> RedactionEngine {
    RedactionEngine::new(RedactionConfig::default()).expect("Failed to create engine")
}

#[test]
fn test_email_and_phone_scenario() {
    let engine = engine();
    let text = "Contact jane.doe@example.com or call 555-123-4567.";

    let outcome = engine.detect_and_plan(text);
    assert_eq!(outcome.unique_targets.len(), 2);

    let mut document = PlainTextDocument::new(text);
    let report = engine.apply_redactions(&outcome, &mut document).unwrap();

    assert_eq!(report.total_redactions, 2);
    assert_eq!(report.counts_by_category.get(&Category::Email), Some(&1));
    assert_eq!(report.counts_by_category.get(&Category::Phone), Some(&1));

    let redacted = document.into_text();
    assert!(!redacted.contains("jane.doe@example.com"));
    assert!(!redacted.contains("555-123-4567"));
    assert_eq!(redacted.matches(DEFAULT_MARKER).count(), 2);
}

#[test]
fn test_every_occurrence_of_a_literal_is_replaced() {
    let engine = engine();
    let text = "First a@example.com, second a@example.com, third a@example.com.";

    let outcome = engine.detect_and_plan(text);
    assert_eq!(outcome.unique_targets.len(), 1);

    let mut document = PlainTextDocument::new(text);
    let report = engine.apply_redactions(&outcome, &mut document).unwrap();

    // One unique target, three replaced occurrences.
    assert_eq!(report.total_redactions, 3);
    assert_eq!(report.counts_by_category.get(&Category::Email), Some(&3));
    assert!(!document.text().contains("a@example.com"));
}

#[test]
fn test_normalized_fallback_finds_separator_stripped_form() {
    let engine = engine();

    // Detection saw the separated form; the document under edit only holds
    // the bare digits.
    let outcome = engine.detect_and_plan("call 123-456-7890 now");
    assert_eq!(
        outcome.unique_targets.category_of("123-456-7890"),
        Some(Category::Phone)
    );

    let mut document = PlainTextDocument::new("call 1234567890 now");
    let report = engine.apply_redactions(&outcome, &mut document).unwrap();

    assert_eq!(report.total_redactions, 1);
    assert_eq!(document.text(), format!("call {DEFAULT_MARKER} now"));

    let action = &report.actions[0];
    assert!(action.used_fallback);
    assert_eq!(action.replaced, 1);
}

#[test]
fn test_unlocatable_literal_is_skipped_and_flagged() {
    let engine = engine();

    let outcome = engine.detect_and_plan("mail a@example.com and b@example.com");

    // Only one of the two literals survives in the target document.
    let mut document = PlainTextDocument::new("mail a@example.com please");
    let report = engine.apply_redactions(&outcome, &mut document).unwrap();

    assert_eq!(report.total_redactions, 1);
    assert!(!document.text().contains("a@example.com"));

    let missing = report
        .actions
        .iter()
        .find(|a| a.target_text == "b@example.com")
        .unwrap();
    assert_eq!(missing.locations_found, 0);
    assert_eq!(missing.replaced, 0);
}

#[test]
fn test_zero_redactions_with_raw_matches_is_diagnosable() {
    let engine = engine();

    let outcome = engine.detect_and_plan("reach me at x@example.com");
    assert_eq!(outcome.raw_finding_count, 1);

    let mut document = PlainTextDocument::new("completely different content");
    let report = engine.apply_redactions(&outcome, &mut document).unwrap();

    assert_eq!(report.total_redactions, 0);
    assert!(report.localization_failed());
    assert_eq!(report.total_raw_findings, 1);
}

#[test]
fn test_custom_marker_is_used_verbatim() {
    let config = RedactionConfig {
        marker: "[REMOVED]".to_string(),
        ..Default::default()
    };
    let engine = RedactionEngine::new(config).unwrap();

    let text = "SSN 123-45-6789 on record.";
    let outcome = engine.detect_and_plan(text);
    let mut document = PlainTextDocument::new(text);
    engine.apply_redactions(&outcome, &mut document).unwrap();

    assert_eq!(document.text(), "SSN [REMOVED] on record.");
}

#[test]
fn test_redacted_document_rescans_clean() {
    let engine = engine();
    let text = "Card 4111-1111-1111-1111 belongs to EMP-12, born 01/02/1993.";

    let outcome = engine.detect_and_plan(text);
    let mut document = PlainTextDocument::new(text);
    engine.apply_redactions(&outcome, &mut document).unwrap();

    let rescan = engine.detect_and_plan(document.text());
    assert!(rescan.unique_targets.is_empty());
}

#[test]
fn test_report_json_contains_hashable_summary() {
    let engine = engine();
    let text = "Call (555) 987-6543.";

    let outcome = engine.detect_and_plan(text);
    let mut document = PlainTextDocument::new(text);
    let report = engine.apply_redactions(&outcome, &mut document).unwrap();

    let json = report.format_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["total_redactions"], 1);
    assert!(parsed["run_id"].as_str().is_some());
}
