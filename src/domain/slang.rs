// ============================================================
// Layer 3 — Slang Dictionary
// ============================================================
// Maps a lowercase slang term to its definition.
//
// Iteration order is insertion order: the partial matcher in
// the translate use case scans terms in the order they appear
// in the document and stops at the first hit.
//
// Duplicate terms: the later definition replaces the earlier
// one, but the term keeps its original position.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Insertion-ordered slang term → definition map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlangMap {
    /// (term, definition) pairs in first-seen order
    entries: Vec<(String, String)>,

    /// term → position in `entries`
    index: HashMap<String, usize>,
}

impl SlangMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term. The term is lowercased before use as the key.
    pub fn insert(&mut self, term: &str, definition: impl Into<String>) {
        let key        = term.to_lowercase();
        let definition = definition.into();

        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = definition,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, definition));
            }
        }
    }

    /// Exact lookup by (already lowercased) term
    pub fn get(&self, term: &str) -> Option<&str> {
        self.index
            .get(term)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Iterate (term, definition) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(t, d)| (t.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialises as a JSON object, keys in insertion order
impl Serialize for SlangMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (term, definition) in &self.entries {
            map.serialize_entry(term, definition)?;
        }
        map.end()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_lowercased() {
        let mut m = SlangMap::new();
        m.insert("Semma", "really good");
        assert_eq!(m.get("semma"), Some("really good"));
        assert_eq!(m.get("Semma"), None);
    }

    #[test]
    fn test_duplicate_keeps_position_takes_last_value() {
        let mut m = SlangMap::new();
        m.insert("machan", "buddy");
        m.insert("semma", "excellent");
        m.insert("MACHAN", "brother-in-law / close friend");

        let terms: Vec<&str> = m.iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["machan", "semma"]);
        assert_eq!(m.get("machan"), Some("brother-in-law / close friend"));
        assert_eq!(m.len(), 2);
    }
}
