// ============================================================
// Layer 4 — Section Boundaries
// ============================================================
// Pulls the text between two fixed heading markers.
//
// Matching rules:
//   - the FIRST occurrence of the start marker opens the section
//   - the FIRST occurrence of the end marker after it closes it
//   - End::Document runs the section to the end of the text
//   - start absent, or end marker never follows → None
//
// Markers are plain substrings, not line-anchored. The slang
// section ends at the next "##", which also matches the first
// two characters of a "###" sub-heading.
//
// The captured text is trimmed of surrounding whitespace.

/// Where a section stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// At the next occurrence of this marker
    Marker(&'static str),
    /// At the end of the document
    Document,
}

/// A start/end marker pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub start: &'static str,
    pub end:   End,
}

impl Boundary {
    pub const fn between(start: &'static str, end: &'static str) -> Self {
        Self { start, end: End::Marker(end) }
    }

    pub const fn to_end(start: &'static str) -> Self {
        Self { start, end: End::Document }
    }

    /// The trimmed text between the markers, if the section exists
    pub fn capture<'a>(&self, text: &'a str) -> Option<&'a str> {
        let open = text.find(self.start)? + self.start.len();
        let rest = &text[open..];

        let body = match self.end {
            End::Marker(marker) => &rest[..rest.find(marker)?],
            End::Document       => rest,
        };

        Some(body.trim())
    }
}

// ─── Known Sections ───────────────────────────────────────────────────────────
// Headings appear in this relative order in the context document.

pub const SLANG: Boundary        = Boundary::between("## Local Slang & Expressions", "##");
pub const MUST_TRY: Boundary     = Boundary::between("### Must-Try Local Foods", "### Popular Street Food Spots");
pub const FOOD_SPOTS: Boundary   = Boundary::between("### Popular Street Food Spots", "## Traffic");
pub const PEAK_HOURS: Boundary   = Boundary::between("### Peak Hours", "### Traffic Hotspots");
pub const HOTSPOTS: Boundary     = Boundary::between("### Traffic Hotspots to Avoid", "### Local Transportation Tips");
pub const TRANSPORT_TIPS: Boundary = Boundary::between("### Local Transportation Tips", "## Weather");
pub const WEATHER: Boundary      = Boundary::between("## Weather Microclimates", "## Cultural");
pub const CULTURE: Boundary      = Boundary::between("## Cultural Nuances", "## Emergency");
pub const EMERGENCY: Boundary    = Boundary::to_end("## Emergency & Practical Info");
