// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises the raw context text before section extraction.
//
// Steps (applied in order):
//   1. Drop a leading byte order mark (U+FEFF)
//   2. Replace "\r\n" with "\n"
//   3. Replace any remaining lone "\r" with "\n"
//
// Nothing else is touched: bullet lines are parsed by exact
// prefix, so indentation and inner spacing must survive.
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise line endings. Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

        let mut out   = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    // "\r\n" collapses to one newline
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push('\n');
                }
                c => out.push(c),
            }
        }

        out
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
