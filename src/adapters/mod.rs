//! Host collaborators for Redactor.
//!
//! The core never touches document storage directly; it reaches the target
//! medium through the [`Locator`](crate::redaction::planner::Locator)
//! capability. Adapters implement that capability for concrete media:
//!
//! - [`text`] - in-memory plain-text documents (used by the CLI)
//!
//! Richer hosts (rich-text documents, editor buffers) plug in by implementing
//! the same trait; the adapter pattern keeps them swappable and lets tests use
//! scripted locators.

pub mod text;

pub use text::PlainTextDocument;
