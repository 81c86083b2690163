// Shared fixtures for unit tests across layers.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use crate::data::preprocessor::Preprocessor;
use crate::domain::document::Document;
use crate::domain::traits::{Clock, DocumentSource};

/// A small context document in the product.md layout
pub const SAMPLE_CONTEXT: &str = r#"# The Local Guide - Chennai

## Local Slang & Expressions
- **"Semma"** - really good/excellent
- **"Machan"** - buddy, close friend
- **"Gethu"** - style, swagger
- **"Scene podathe"** - stop showing off
- **Bad line without separator**

## Food Culture

### Must-Try Local Foods
- **Idli Sambar** - steamed rice cakes with lentil stew
- **Filter Coffee** - strong, frothy, served in a davara

### Popular Street Food Spots
- **Marina Beach** - sundal, murukku and **bajji** by the sea
- **Sowcarpet** - North Indian chaat and sweets

## Traffic & Transportation

### Peak Hours
- **Morning** - 8:00-10:30 AM
- **Evening** - 5:30-8:30 PM

### Traffic Hotspots to Avoid
- **Anna Salai** - Mount Road jams all day
- **Kathipara Junction** - cloverleaf bottleneck near the airport

### Local Transportation Tips
- **Auto rickshaws** - insist on the meter or fix the fare first
- **Chennai Metro** - fastest way across the city

## Weather Microclimates
Hot and humid most of the year. Coastal breeze after 4 PM.

## Cultural Nuances
Greet with "Vanakkam". Remove footwear before entering homes and temples.

## Emergency & Practical Info
- Ambulance: 108
- Police: 100
"#;

/// 2026-10-12 is a Monday; `day` offsets from there (4 = Friday, 6 = Sunday)
pub fn week_day_at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 12 + day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture date")
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A document source over text that is already in memory.
pub struct InlineSource {
    source: String,
    text:   String,
}

impl InlineSource {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}

impl DocumentSource for InlineSource {
    fn load(&self) -> Result<Document> {
        let text = Preprocessor::new().clean(&self.text);
        Ok(Document::new(self.source.clone(), text))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
mod tests {
    use super::*;

    #[test]
    fn test_inline_source_normalises_like_the_file_loader() {
        let doc = InlineSource::new("inline", "a\r\nb").load().unwrap();
        assert_eq!(doc.source, "inline");
        assert_eq!(doc.text, "a\nb");
    }
}
