// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Reads the context document (product.md by default) into a
// single string.
//
// Failure policy:
//   - File does not exist  → sentinel document, logged as warn
//   - Any other I/O error  → propagated with the path attached
//     (permission denied, invalid UTF-8, path is a directory)
//
// The text passes through the Preprocessor so every later
// stage sees "\n" line endings only.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{fs, io::ErrorKind, path::PathBuf};

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads the context document from a file on disk.
/// Implements the DocumentSource trait from Layer 3.
pub struct ContextFileLoader {
    /// Path to the context document
    path: PathBuf,
}

impl ContextFileLoader {
    /// Create a new loader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for ContextFileLoader {
    fn load(&self) -> Result<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Context file '{}' not found — using fallback text",
                    self.path.display()
                );
                return Ok(Document::fallback());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Cannot read context file '{}'", self.path.display())
                });
            }
        };

        let text = Preprocessor::new().clean(&raw);

        tracing::info!(
            "Loaded context '{}' ({} chars)",
            self.path.display(),
            text.len()
        );

        Ok(Document::new(self.path.display().to_string(), text))
    }
}
