// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// guide knows about:
//
//   Document        — the raw context text
//   SlangMap        — slang term → definition
//   FoodSpots       — must-try dishes and street food areas
//   TrafficPatterns — peak hours, hotspots, transport tips
//   InsightTopic    — weather / culture / emergency routing
//
// Rules for this layer:
//   - NO file I/O
//   - NO parsing of the document (that's Layer 4)
//   - NO formatting of replies (that's Layer 2)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The loaded context document
pub mod document;

// Slang dictionary
pub mod slang;

// Food recommendations
pub mod food;

// Traffic patterns and hotspot names
pub mod traffic;

// Insight categories and their keyword sets
pub mod insight;

// Core abstractions (traits) that other layers implement
pub mod traits;
