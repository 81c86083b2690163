// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One-shot subcommands mirroring the interactive commands,
// plus `repl` (the default) and `sections`.
//
// Free-text arguments are collected as word lists so that
//   local-guide translate that's semma machan
// works without quoting.
//
// Reference: Rust Book §12 (Building a CLI Program)

use chrono::NaiveDateTime;
use clap::{Args, Subcommand};

/// Subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive guide (default)
    Repl,

    /// Translate local slang in a piece of text
    Translate(TranslateArgs),

    /// Recommend food; mention "street" or "quick" for street food spots
    Food(FoodArgs),

    /// Estimate traffic, optionally near a location
    Traffic(TrafficArgs),

    /// Weather, culture, or emergency information
    Insight(InsightArgs),

    /// Print the sections extracted from the context file as JSON
    Sections,
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Text containing slang
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FoodArgs {
    /// Optional preference, e.g. "quick street snacks"
    pub preference: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TrafficArgs {
    /// Where you are or are heading
    pub location: Vec<String>,

    /// Local time to estimate for, "YYYY-MM-DD HH:MM" (defaults to now)
    #[arg(long, value_parser = parse_local_time)]
    pub at: Option<NaiveDateTime>,
}

#[derive(Args, Debug)]
pub struct InsightArgs {
    /// Topic or question, e.g. "what's the weather like"
    #[arg(required = true, num_args = 1..)]
    pub topic: Vec<String>,
}

/// Join word-list arguments back into one string
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}

/// Accepts "YYYY-MM-DD HH:MM", "YYYY-MM-DDTHH:MM", or either with seconds
pub fn parse_local_time(s: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
        .ok_or_else(|| format!("invalid time '{}', expected YYYY-MM-DD HH:MM", s))
}
