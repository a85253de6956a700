//! Plain-text document host
//!
//! An in-memory text document implementing the [`Locator`] capability. This is
//! the host collaborator used by the CLI; richer hosts (a document store, an
//! editor buffer) implement the same trait.

use crate::domain::{LocateError, ReplaceError};
use crate::redaction::planner::Locator;
use regex::RegexBuilder;

/// Opaque handle to one located occurrence in a [`PlainTextDocument`]
///
/// Valid until the next `find_occurrences` call: each search starts a new
/// mutation batch and invalidates handles from the previous one.
#[derive(Debug, Clone)]
pub struct TextLocation {
    start: usize,
    end: usize,
    batch: u64,
}

/// In-memory plain-text document
///
/// Searches are case-insensitive substring matches. Located spans are handed
/// out in descending offset order so that replacing them in sequence never
/// shifts the spans that are still pending.
pub struct PlainTextDocument {
    text: String,
    batch: u64,
}

impl PlainTextDocument {
    /// Create a document over the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            batch: 0,
        }
    }

    /// Current document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Prepend a line to the document
    pub fn insert_header(&mut self, header: &str) {
        self.text.insert_str(0, header);
        self.text.insert(header.len(), '\n');
        self.batch += 1;
    }
}

impl Locator for PlainTextDocument {
    type Location = TextLocation;

    fn find_occurrences(&mut self, literal: &str) -> Result<Vec<TextLocation>, LocateError> {
        if literal.is_empty() {
            return Ok(Vec::new());
        }

        // Escaped literal search; case-insensitivity comes from the matcher
        // flags, so byte offsets always refer to the original text.
        let pattern = RegexBuilder::new(&regex::escape(literal))
            .case_insensitive(true)
            .build()
            .map_err(|e| LocateError::SearchFailed(e.to_string()))?;

        self.batch += 1;
        let batch = self.batch;

        let mut locations: Vec<TextLocation> = pattern
            .find_iter(&self.text)
            .map(|m| TextLocation {
                start: m.start(),
                end: m.end(),
                batch,
            })
            .collect();

        // Descending offset order keeps the remaining handles of this batch
        // valid while earlier ones are replaced.
        locations.reverse();

        Ok(locations)
    }

    fn replace(&mut self, location: &TextLocation, marker: &str) -> Result<(), ReplaceError> {
        if location.batch != self.batch {
            return Err(ReplaceError::StaleLocation);
        }
        if location.start > location.end
            || location.end > self.text.len()
            || !self.text.is_char_boundary(location.start)
            || !self.text.is_char_boundary(location.end)
        {
            return Err(ReplaceError::InvalidRange {
                start: location.start,
                end: location.end,
            });
        }

        self.text.replace_range(location.start..location.end, marker);
        Ok(())
    }
}
