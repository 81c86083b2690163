// ============================================================
// Layer 2 — Insight Use Case
// ============================================================
// Routes a free-text query to one of the general-insight
// sections (weather, culture, emergency) and returns that
// section's text under a header.
//
// Sections are scanned from the document on each call rather
// than at startup.

use crate::data::extractor::SectionExtractor;
use crate::domain::insight::InsightTopic;

pub const INSIGHT_HELP: &str =
    "Ask me about: slang translation, food recommendations, traffic conditions, weather, culture, or emergency info!";

pub struct InsightUseCase<'a> {
    text: &'a str,
}

impl<'a> InsightUseCase<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn answer(&self, query: &str) -> String {
        let Some(topic) = InsightTopic::classify(query) else {
            return INSIGHT_HELP.to_string();
        };

        tracing::debug!("Insight query dispatched to {:?}", topic);

        match SectionExtractor::new(self.text).insight(topic) {
            Some(body) => format!("{}\n{}", topic.header(), body),
            None => topic.not_available().to_string(),
        }
    }
}
