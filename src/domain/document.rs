// ============================================================
// Layer 3 — Context Document
// ============================================================
// The raw text of the context file (product.md by default).
// Loaded once at startup and never reloaded.
//
// `source` records where the text came from: the file path,
// or FALLBACK_SOURCE when the file was missing and the
// sentinel text was substituted.

use serde::{Deserialize, Serialize};

/// Text substituted for the context document when the file does not exist.
/// Contains none of the known headings, so every handler degrades
/// to its "not available" branch.
pub const FALLBACK_TEXT: &str = "Context file not found. Please ensure product.md exists.";

/// Source name recorded on a fallback document
pub const FALLBACK_SOURCE: &str = "<fallback>";

/// The full context document held by the guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// The path the text was read from
    pub source: String,

    /// The full document text, line endings already normalised
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("product.md", "## Local Slang & Expressions ...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// The sentinel document used when the context file is absent
    pub fn fallback() -> Self {
        Self::new(FALLBACK_SOURCE, FALLBACK_TEXT)
    }

    /// True if this document is the missing-file sentinel
    pub fn is_fallback(&self) -> bool {
        self.source == FALLBACK_SOURCE
    }
}
