// ============================================================
// Layer 2 — Food Use Case
// ============================================================
// Preference mentions "street" or "quick" (any case, anywhere)
// → street food spots. Anything else, including "" → must-try
// dishes.

use crate::domain::food::FoodSpots;

pub const STREET_HEADER: &str = "🌮 Street Food Recommendations:";
pub const MUST_TRY_HEADER: &str = "🍽️ Must-Try Local Foods:";

pub struct FoodUseCase<'a> {
    foods: &'a FoodSpots,
}

impl<'a> FoodUseCase<'a> {
    pub fn new(foods: &'a FoodSpots) -> Self {
        Self { foods }
    }

    pub fn recommend(&self, preference: &str) -> String {
        let pref = preference.to_lowercase();

        let (header, entries) = if pref.contains("street") || pref.contains("quick") {
            (STREET_HEADER, &self.foods.spots)
        } else {
            (MUST_TRY_HEADER, &self.foods.must_try)
        };

        std::iter::once(header.to_string())
            .chain(entries.iter().map(|e| format!("  • {}", e)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
