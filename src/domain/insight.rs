// ============================================================
// Layer 3 — Insight Topics
// ============================================================
// The three general-insight categories, checked in this order:
//   Weather   → weather, climate, fog, temperature
//   Culture   → culture, etiquette, attitude, local
//   Emergency → emergency, safety, earthquake, practical
//
// A query belongs to the first topic with any keyword that is
// a substring of the lowercased query.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightTopic {
    Weather,
    Culture,
    Emergency,
}

impl InsightTopic {
    /// Dispatch order
    pub const ALL: [InsightTopic; 3] = [Self::Weather, Self::Culture, Self::Emergency];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Weather   => &["weather", "climate", "fog", "temperature"],
            Self::Culture   => &["culture", "etiquette", "attitude", "local"],
            Self::Emergency => &["emergency", "safety", "earthquake", "practical"],
        }
    }

    /// Line printed above the section text
    pub fn header(self) -> &'static str {
        match self {
            Self::Weather   => "🌤️ Weather Microclimates:",
            Self::Culture   => "🏛️ Cultural Nuances:",
            Self::Emergency => "🚨 Emergency & Practical Info:",
        }
    }

    /// Returned when the topic's section is missing from the document
    pub fn not_available(self) -> &'static str {
        match self {
            Self::Weather   => "Weather information not available.",
            Self::Culture   => "Cultural information not available.",
            Self::Emergency => "Emergency information not available.",
        }
    }

    /// First topic whose keyword set matches the query, if any
    pub fn classify(query: &str) -> Option<Self> {
        let q = query.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|topic| topic.keywords().iter().any(|k| q.contains(k)))
    }
}
