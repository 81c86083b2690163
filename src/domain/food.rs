// ============================================================
// Layer 3 — Food Spots
// ============================================================
// Two ordered lists pulled out of the food sections:
//   must_try — "FOOD: DESCRIPTION"
//   spots    — "AREA: DESCRIPTION"
// Order is the order of appearance in the document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSpots {
    /// Dishes listed under "### Must-Try Local Foods"
    pub must_try: Vec<String>,

    /// Areas listed under "### Popular Street Food Spots"
    pub spots: Vec<String>,
}

impl FoodSpots {
    /// Format a parsed bullet as a stored entry
    pub fn entry(name: &str, description: &str) -> String {
        format!("{}: {}", name, description)
    }
}
