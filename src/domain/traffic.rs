// ============================================================
// Layer 3 — Traffic Patterns
// ============================================================
// Three ordered lists of raw bullet remainders. Each entry is
// the bullet line with its first three characters removed, so
//   "- **Anna Salai** - Avoid 8-10 AM"
// is stored as
//   "*Anna Salai** - Avoid 8-10 AM"
// Emphasis markers are otherwise kept verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficPatterns {
    pub peak_hours: Vec<String>,
    pub hotspots: Vec<String>,
    pub tips: Vec<String>,
}

/// The hotspot's name: the text between the first and second
/// `**` of the stored line, or everything after the first `**`
/// when there is no second one. None when the line has no `**`.
///
/// Stored lines have already lost the bullet's first three
/// characters, so the first `**` closes the bullet's bold text:
///
///   "*Anna Salai** - Mount Road **jams** all day" → Some(" - Mount Road ")
///   "*Anna Salai** - Mount Road jams"             → Some(" - Mount Road jams")
///   "*Kathipara Junction"                         → None
pub fn hotspot_name(hotspot: &str) -> Option<&str> {
    let mut parts = hotspot.split("**");
    parts.next();
    parts.next()
}
