// ============================================================
// Layer 2 — Translate Use Case
// ============================================================
// Explains the slang found in a piece of text.
//
// Per whitespace token (input lowercased first):
//   1. clean = token with every non-word, non-space char removed
//   2. clean is a known term        → "'tok' = definition"
//   3. else first term (document order) where term ⊂ clean or
//      clean ⊂ term                 → "'tok' (contains 'term') = definition"
//   4. else nothing for this token
//
// Tokens that clean down to "" (pure punctuation) are skipped.
// Word chars are letters, numbers and `_`; combining marks
// (Tamil vowel signs, the virama) are not word chars.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::slang::SlangMap;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("Invalid regex pattern"));

pub const NO_SLANG: &str = "No local slang detected in your text.";
pub const SLANG_HEADER: &str = "Slang translations found:";

pub struct TranslateUseCase<'a> {
    slang: &'a SlangMap,
}

impl<'a> TranslateUseCase<'a> {
    pub fn new(slang: &'a SlangMap) -> Self {
        Self { slang }
    }

    pub fn translate(&self, text: &str) -> String {
        if self.slang.is_empty() {
            return NO_SLANG.to_string();
        }

        let lowered = text.to_lowercase();

        let lines: Vec<String> = lowered
            .split_whitespace()
            .filter_map(|token| self.explain(token))
            .collect();

        if lines.is_empty() {
            return NO_SLANG.to_string();
        }

        let mut out = String::from(SLANG_HEADER);
        for line in lines {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }

    /// The translation line for one lowercased token, if any
    fn explain(&self, token: &str) -> Option<String> {
        let clean = strip_punctuation(token);
        if clean.is_empty() {
            return None;
        }

        if let Some(definition) = self.slang.get(&clean) {
            return Some(format!("'{}' = {}", token, definition));
        }

        self.slang
            .iter()
            .find(|&(term, _)| clean.contains(term) || term.contains(clean.as_str()))
            .map(|(term, definition)| {
                format!("'{}' (contains '{}') = {}", token, term, definition)
            })
    }
}

/// Keep word characters (letters, numbers, `_`) and whitespace
fn strip_punctuation(token: &str) -> String {
    NON_WORD.replace_all(token, "").into_owned()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::extractor::SectionExtractor;
    use crate::test_support::SAMPLE_CONTEXT;

    fn sample_slang() -> SlangMap {
        SectionExtractor::new(SAMPLE_CONTEXT).slang()
    }

    #[test]
    fn test_exact_matches() {
        let slang = sample_slang();
        let out   = TranslateUseCase::new(&slang).translate("that's semma machan");

        assert_eq!(
            out,
            "Slang translations found:\n\
             'semma' = really good/excellent\n\
             'machan' = buddy, close friend"
        );
    }

    #[test]
    fn test_punctuation_kept_in_echo() {
        let slang = sample_slang();
        let out   = TranslateUseCase::new(&slang).translate("Semma!");
        assert!(out.contains("'semma!' = really good/excellent"));
    }

    #[test]
    fn test_partial_match_either_direction() {
        let slang = sample_slang();
        let uc    = TranslateUseCase::new(&slang);

        // term inside token
        assert!(uc
            .translate("gethuuu")
            .contains("'gethuuu' (contains 'gethu') = style, swagger"));
        // token inside term
        assert!(uc
            .translate("scene")
            .contains("'scene' (contains 'scene podathe') = stop showing off"));
    }

    #[test]
    fn test_exact_takes_priority_over_partial() {
        let mut slang = SlangMap::new();
        slang.insert("sem", "partial only");
        slang.insert("semma", "exact");

        let out = TranslateUseCase::new(&slang).translate("semma");
        assert_eq!(out, "Slang translations found:\n'semma' = exact");
    }

    #[test]
    fn test_only_first_partial_term_reported() {
        let mut slang = SlangMap::new();
        slang.insert("ma", "first");
        slang.insert("chan", "second");

        let out = TranslateUseCase::new(&slang).translate("machan");
        assert_eq!(out, "Slang translations found:\n'machan' (contains 'ma') = first");
    }

    #[test]
    fn test_no_slang() {
        let slang = sample_slang();
        assert_eq!(TranslateUseCase::new(&slang).translate("hello world"), NO_SLANG);
        assert_eq!(TranslateUseCase::new(&slang).translate(""), NO_SLANG);
    }

    #[test]
    fn test_pure_punctuation_token_is_skipped() {
        let slang = sample_slang();
        assert_eq!(TranslateUseCase::new(&slang).translate("!!! ?"), NO_SLANG);
    }

    #[test]
    fn test_strip_keeps_letters_numbers_underscore() {
        assert_eq!(strip_punctuation("that's"), "thats");
        assert_eq!(strip_punctuation("vera_level2!"), "vera_level2");
        assert_eq!(strip_punctuation("¿qué?"), "qué");
    }

    #[test]
    fn test_strip_drops_combining_marks() {
        // vowel sign aa
        assert_eq!(strip_punctuation("கா"), "க");
        // vowel sign e and virama
        assert_eq!(strip_punctuation("செம்ம"), "சமம");
    }

    #[test]
    fn test_tamil_script_term_matches_after_marks_dropped() {
        let mut slang = SlangMap::new();
        slang.insert("சமம", "really good");

        let out = TranslateUseCase::new(&slang).translate("செம்ம!");
        assert_eq!(out, "Slang translations found:\n'செம்ம!' = really good");
    }

    #[test]
    fn test_empty_dictionary() {
        let slang = SlangMap::new();
        assert_eq!(TranslateUseCase::new(&slang).translate("semma"), NO_SLANG);
    }

    #[test]
    fn test_translation_is_repeatable() {
        let slang = sample_slang();
        let uc    = TranslateUseCase::new(&slang);
        let text  = "Semma gethu da, scene podathe!";
        assert_eq!(uc.translate(text), uc.translate(text));
    }
}
