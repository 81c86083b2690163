// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per kind of query, plus the LocalGuide that
// owns the extracted structures and hands them out.
//
// Rules for this layer:
//   - No printing or input reading (that's Layer 1)
//   - No file access (that's Layer 4)
//   - Every query returns a String; none of them can fail
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The guide instance and its configuration
pub mod guide;

// Slang translation
pub mod translate_use_case;

// Food recommendations
pub mod food_use_case;

// Traffic estimates
pub mod traffic_use_case;

// Weather / culture / emergency insights
pub mod insight_use_case;
