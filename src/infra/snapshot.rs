// ============================================================
// Layer 6 — Section Snapshot
// ============================================================
// Writes what the extractor pulled out of the context document
// as pretty-printed JSON. Used by the `sections` command to
// check a product.md edit without starting the REPL.
//
// Example output:
//   {
//     "source": "product.md",
//     "slang": { "semma": "really good/excellent", ... },
//     "foods": { "must_try": [...], "spots": [...] },
//     "traffic": { "peak_hours": [...], "hotspots": [...], "tips": [...] }
//   }
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::application::guide::LocalGuide;
use crate::domain::food::FoodSpots;
use crate::domain::slang::SlangMap;
use crate::domain::traffic::TrafficPatterns;

/// Borrowed view of the guide's extracted structures
#[derive(Debug, Serialize)]
pub struct GuideSnapshot<'a> {
    pub source:  &'a str,
    pub slang:   &'a SlangMap,
    pub foods:   &'a FoodSpots,
    pub traffic: &'a TrafficPatterns,
}

impl<'a> GuideSnapshot<'a> {
    pub fn of(guide: &'a LocalGuide) -> Self {
        Self {
            source:  &guide.document().source,
            slang:   guide.slang(),
            foods:   guide.foods(),
            traffic: guide.traffic(),
        }
    }
}

/// Serialise the snapshot as pretty JSON followed by a newline
pub fn write_snapshot<W: Write>(guide: &LocalGuide, mut out: W) -> Result<()> {
    let snapshot = GuideSnapshot::of(guide);

    serde_json::to_writer_pretty(&mut out, &snapshot)
        .context("Failed to serialise section snapshot")?;
    writeln!(out)?;

    tracing::debug!("Wrote section snapshot for '{}'", snapshot.source);
    Ok(())
}
