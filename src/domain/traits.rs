// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams between the guide and the outside world:
//
//   DocumentSource — where the context text comes from
//                    (a file on disk, or an in-memory string)
//   Clock          — what time it is "now" for the traffic
//                    estimator (wall clock, or a fixed instant)
//
// The application layer only sees these traits, so tests can
// drive it with inline documents and fixed times.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce the context document.
///
/// Implementations:
///   - ContextFileLoader → reads a file, sentinel text when missing
///   - InlineSource      → wraps text already in memory (tests)
pub trait DocumentSource {
    /// Load the document. A missing file is not an error;
    /// other I/O failures are.
    fn load(&self) -> Result<Document>;
}

// ─── Clock ────────────────────────────────────────────────────────────────────
/// Supplies the current local time.
///
/// Implementations:
///   - SystemClock → chrono::Local::now()
///   - FixedClock  → a constant instant (tests)
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
