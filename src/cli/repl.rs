// ============================================================
// Layer 1 — Interactive Loop
// ============================================================
// Reads one command per line and prints the guide's reply.
//
//   translate <text>     - Translate local slang
//   food [preference]    - Get food recommendations
//   traffic [location]   - Check traffic conditions
//   insight <topic>      - Get local insights
//   help                 - Show this help
//   quit                 - Exit the guide
//
// The banner lists all six; `help` inside the loop lists only
// the four query commands.
//
// Empty input and end of input also end the session. A failed
// read is reported and the loop carries on.
//
// Reference: Rust Book §12 (Accepting Input)

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::guide::LocalGuide;

pub const WELCOME: &str = "🏛️ Welcome to The Local Guide - Chennai Edition!\n\
I understand Chennai culture, Tamil slang, food, and traffic patterns.";

pub const QUERY_COMMANDS: &str = "Available commands:
  translate <text>     - Translate local slang
  food [preference]    - Get food recommendations
  traffic [location]   - Check traffic conditions
  insight <topic>      - Get local insights";

const SESSION_COMMANDS: &str = "
  help                 - Show this help
  quit                 - Exit the guide";

pub const PROMPT: &str = "\n🗺️ Local Guide> ";
pub const FAREWELL: &str = "Thanks for using The Local Guide! Vanakkam! 🏛️";
pub const INTERRUPTED: &str = "\n\nThanks for using The Local Guide! 🏛️";
pub const TRANSLATE_USAGE: &str =
    "Please provide text to translate. Example: translate 'That's semma machan'";
pub const INSIGHT_USAGE: &str = "Please specify a topic. Example: insight monsoon";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' for available commands.";

/// What the loop should do after one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print and keep reading
    Continue(String),
    /// Print and stop
    Quit(String),
}

/// Route one input line to the guide
pub fn dispatch(guide: &LocalGuide, line: &str) -> Reply {
    let input = line.trim();

    if input.is_empty() || input.eq_ignore_ascii_case("quit") {
        return Reply::Quit(FAREWELL.to_string());
    }

    if input.eq_ignore_ascii_case("help") {
        return Reply::Continue(format!("\n{}", QUERY_COMMANDS));
    }

    let (command, args) = input.split_once(' ').unwrap_or((input, ""));

    let reply = match command.to_lowercase().as_str() {
        "translate" if args.is_empty() => TRANSLATE_USAGE.to_string(),
        "translate" => guide.translate_slang(args),
        "food"      => guide.recommend_food(args),
        "traffic"   => guide.estimate_traffic(args, None),
        "insight" if args.is_empty() => INSIGHT_USAGE.to_string(),
        "insight"   => guide.local_insight(args),
        _           => UNKNOWN_COMMAND.to_string(),
    };

    tracing::debug!("Handled '{}' command", command);
    Reply::Continue(reply)
}

/// Run the interactive session until quit or end of input
pub fn run<R: BufRead, W: Write>(guide: &LocalGuide, mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", WELCOME)?;
    writeln!(out, "\n{}{}", QUERY_COMMANDS, SESSION_COMMANDS)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                writeln!(out, "{}", INTERRUPTED)?;
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Failed to read command: {e}");
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        }

        match dispatch(guide, &line) {
            Reply::Continue(text) => writeln!(out, "{}", text)?,
            Reply::Quit(text) => {
                writeln!(out, "{}", text)?;
                break;
            }
        }
    }

    Ok(())
}
