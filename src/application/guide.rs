// ============================================================
// Layer 2 — Local Guide
// ============================================================
// The one object the CLI talks to. Built once at startup:
//
//   DocumentSource ──load──▶ Document
//                               │
//                     SectionExtractor (once)
//                               │
//          SlangMap · FoodSpots · TrafficPatterns
//
// After construction nothing is mutated; every query method
// takes &self and returns the reply text.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::food_use_case::FoodUseCase;
use crate::application::insight_use_case::InsightUseCase;
use crate::application::traffic_use_case::TrafficUseCase;
use crate::application::translate_use_case::TranslateUseCase;
use crate::data::extractor::SectionExtractor;
use crate::data::loader::ContextFileLoader;
use crate::domain::document::Document;
use crate::domain::food::FoodSpots;
use crate::domain::slang::SlangMap;
use crate::domain::traffic::TrafficPatterns;
use crate::domain::traits::{Clock, DocumentSource};
use crate::infra::clock::SystemClock;

/// Default context document name
pub const DEFAULT_CONTEXT: &str = "product.md";

/// Everything needed to build a guide.
/// The CLI converts its arguments into this struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuideConfig {
    /// Path to the context document
    pub context_path: PathBuf,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self { context_path: PathBuf::from(DEFAULT_CONTEXT) }
    }
}

pub struct LocalGuide {
    document: Document,
    slang:    SlangMap,
    foods:    FoodSpots,
    traffic:  TrafficPatterns,
    clock:    Box<dyn Clock>,
}

impl LocalGuide {
    /// Load the configured context file and use the wall clock
    pub fn new(config: &GuideConfig) -> Result<Self> {
        let loader = ContextFileLoader::new(&config.context_path);
        Self::from_source(&loader, Box::new(SystemClock))
    }

    pub fn from_source(source: &dyn DocumentSource, clock: Box<dyn Clock>) -> Result<Self> {
        let document = source.load()?;
        Ok(Self::from_document(document, clock))
    }

    pub fn from_document(document: Document, clock: Box<dyn Clock>) -> Self {
        if document.is_fallback() {
            tracing::warn!("No context document; every section will be empty");
        }

        let extractor = SectionExtractor::new(&document.text);
        let slang     = extractor.slang();
        let foods     = extractor.foods();
        let traffic   = extractor.traffic();

        tracing::info!(
            "Guide ready from '{}': {} slang terms, {} must-try foods, {} food spots, {} hotspots, {} tips",
            document.source,
            slang.len(),
            foods.must_try.len(),
            foods.spots.len(),
            traffic.hotspots.len(),
            traffic.tips.len(),
        );

        Self { document, slang, foods, traffic, clock }
    }

    pub fn translate_slang(&self, text: &str) -> String {
        TranslateUseCase::new(&self.slang).translate(text)
    }

    pub fn recommend_food(&self, preference: &str) -> String {
        FoodUseCase::new(&self.foods).recommend(preference)
    }

    /// `current_time` defaults to the guide's clock
    pub fn estimate_traffic(&self, location: &str, current_time: Option<NaiveDateTime>) -> String {
        let at = current_time.unwrap_or_else(|| self.clock.now());
        TrafficUseCase::new(&self.traffic).estimate(location, at)
    }

    pub fn local_insight(&self, query: &str) -> String {
        InsightUseCase::new(&self.document.text).answer(query)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn slang(&self) -> &SlangMap {
        &self.slang
    }

    pub fn foods(&self) -> &FoodSpots {
        &self.foods
    }

    pub fn traffic(&self) -> &TrafficPatterns {
        &self.traffic
    }
}
