// ============================================================
// Layer 4 — Section Extractor
// ============================================================
// Turns the context text into the guide's structures.
//
//   context text
//       │
//       ├── SLANG          → SlangMap         (slang grammar)
//       ├── MUST_TRY       → FoodSpots.must_try  (named grammar)
//       ├── FOOD_SPOTS     → FoodSpots.spots     (named grammar)
//       ├── PEAK_HOURS     → TrafficPatterns.peak_hours (raw)
//       ├── HOTSPOTS       → TrafficPatterns.hotspots   (raw)
//       ├── TRANSPORT_TIPS → TrafficPatterns.tips       (raw)
//       └── WEATHER / CULTURE / EMERGENCY → raw text, on demand
//
// Each pass is independent. A missing section leaves its
// collection empty; extraction never fails.

use crate::data::bullets::{bullet_lines, parse_named, parse_slang, strip_raw};
use crate::data::section::{self, Boundary};
use crate::domain::food::FoodSpots;
use crate::domain::insight::InsightTopic;
use crate::domain::slang::SlangMap;
use crate::domain::traffic::TrafficPatterns;

pub struct SectionExtractor<'a> {
    text: &'a str,
}

impl<'a> SectionExtractor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn slang(&self) -> SlangMap {
        let mut map = SlangMap::new();

        if let Some(body) = self.section(section::SLANG, "slang") {
            for (term, definition) in bullet_lines(body).filter_map(parse_slang) {
                map.insert(term, definition);
            }
        }

        map
    }

    pub fn foods(&self) -> FoodSpots {
        FoodSpots {
            must_try: self.named_entries(section::MUST_TRY, "must-try foods"),
            spots:    self.named_entries(section::FOOD_SPOTS, "street food spots"),
        }
    }

    pub fn traffic(&self) -> TrafficPatterns {
        TrafficPatterns {
            peak_hours: self.raw_entries(section::PEAK_HOURS, "peak hours"),
            hotspots:   self.raw_entries(section::HOTSPOTS, "traffic hotspots"),
            tips:       self.raw_entries(section::TRANSPORT_TIPS, "transportation tips"),
        }
    }

    /// Raw text of an insight topic's section
    pub fn insight(&self, topic: InsightTopic) -> Option<&'a str> {
        let boundary = match topic {
            InsightTopic::Weather   => section::WEATHER,
            InsightTopic::Culture   => section::CULTURE,
            InsightTopic::Emergency => section::EMERGENCY,
        };
        self.section(boundary, topic.header())
    }

    fn section(&self, boundary: Boundary, label: &str) -> Option<&'a str> {
        let found = boundary.capture(self.text);
        if found.is_none() {
            tracing::debug!("Section '{}' not found ({})", boundary.start, label);
        }
        found
    }

    fn named_entries(&self, boundary: Boundary, label: &str) -> Vec<String> {
        self.section(boundary, label)
            .map(|body| {
                bullet_lines(body)
                    .filter_map(parse_named)
                    .map(|(name, desc)| FoodSpots::entry(name, desc))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn raw_entries(&self, boundary: Boundary, label: &str) -> Vec<String> {
        self.section(boundary, label)
            .map(|body| {
                bullet_lines(body)
                    .filter_map(strip_raw)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
