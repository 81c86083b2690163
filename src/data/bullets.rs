// ============================================================
// Layer 4 — Bullet Line Grammars
// ============================================================
// Every structured entry in the context document is a line
// starting with "- **". Three grammars are recognised:
//
//   slang   - **"TERM"** - DEFINITION     (quotes optional)
//   named   - **NAME** - DESCRIPTION
//   raw     - **anything                  (first 3 chars dropped)
//
// Lines that do not fit a grammar are skipped, never an error.

/// Marker that opens every bullet line
pub const BULLET: &str = "- **";

/// Lines of a captured section that start with the bullet marker.
/// Indented bullets do not count.
pub fn bullet_lines(section: &str) -> impl Iterator<Item = &str> {
    section.split('\n').filter(|line| line.starts_with(BULLET))
}

/// `- **"TERM"** - DEFINITION` → (TERM, DEFINITION)
///
/// TERM is one or more characters other than `"` and `*`,
/// optionally wrapped in double quotes.
pub fn parse_slang(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(BULLET)?;
    let rest = rest.strip_prefix('"').unwrap_or(rest);

    let (term, rest) = split_term(rest, |c| c != '"' && c != '*')?;
    let rest = rest.strip_prefix('"').unwrap_or(rest);

    closing_and_description(rest).map(|def| (term, def))
}

/// `- **NAME** - DESCRIPTION` → (NAME, DESCRIPTION)
///
/// NAME is one or more characters other than `*`.
pub fn parse_named(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(BULLET)?;

    let (name, rest) = split_term(rest, |c| c != '*')?;

    closing_and_description(rest).map(|desc| (name, desc))
}

/// A bullet line with its first three characters removed.
/// "- **Anna Salai** - ..." → "*Anna Salai** - ..."
pub fn strip_raw(line: &str) -> Option<&str> {
    if line.starts_with(BULLET) {
        Some(&line[3..])
    } else {
        None
    }
}

/// Longest non-empty prefix whose chars all satisfy `keep`
fn split_term(s: &str, keep: impl Fn(char) -> bool) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !keep(c)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}

/// `** - DESCRIPTION` → DESCRIPTION (must be non-empty)
fn closing_and_description(s: &str) -> Option<&str> {
    let desc = s.strip_prefix("**")?.strip_prefix(" - ")?;
    if desc.is_empty() {
        None
    } else {
        Some(desc)
    }
}
