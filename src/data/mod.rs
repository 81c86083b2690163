// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the context file on disk to the guide's
// in-memory structures.
//
//   product.md
//       │
//       ▼
//   ContextFileLoader → reads the file, sentinel if missing
//       │
//       ▼
//   Preprocessor      → normalises line endings
//       │
//       ▼
//   SectionExtractor  → heading boundaries + bullet grammars
//       │
//       ▼
//   SlangMap / FoodSpots / TrafficPatterns
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads the context document from disk
pub mod loader;

/// Normalises raw text before extraction
pub mod preprocessor;

/// Heading marker pairs and section capture
pub mod section;

/// Bullet line grammars
pub mod bullets;

/// Builds the domain structures from the document text
pub mod extractor;
