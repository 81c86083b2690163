// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting pieces that talk to the outside world:
//
//   clock.rs    — SystemClock, the wall-clock implementation
//                 of the domain Clock trait
//
//   snapshot.rs — JSON export of the extracted sections for
//                 the `sections` command
//
// Reference: Rust Book §7 (Modules)

/// Wall-clock time source
pub mod clock;

/// JSON snapshot of the extracted sections
pub mod snapshot;
