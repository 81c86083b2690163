// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, builds the LocalGuide once, and hands it by reference
// to whichever command runs. No answers are computed here.
//
//   local-guide                          → interactive REPL
//   local-guide translate that's semma   → one reply, then exit
//   local-guide traffic anna salai --at "2026-10-16 17:00"
//   local-guide --context other.md sections
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod repl;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::application::guide::{GuideConfig, LocalGuide, DEFAULT_CONTEXT};
use crate::infra::snapshot::write_snapshot;
use commands::{joined, Commands};

#[derive(Parser, Debug)]
#[command(
    name = "local-guide",
    version,
    about = "Slang, food, traffic and local insights from a context document."
)]
pub struct Cli {
    /// Context document with the guide's sections
    #[arg(long, global = true, default_value = DEFAULT_CONTEXT)]
    pub context: PathBuf,

    /// The command to run (defaults to the interactive REPL)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The application layer never sees clap types
impl From<&Cli> for GuideConfig {
    fn from(cli: &Cli) -> Self {
        GuideConfig { context_path: cli.context.clone() }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = GuideConfig::from(&self);
        let guide  = LocalGuide::new(&config)?;

        match self.command.unwrap_or(Commands::Repl) {
            Commands::Repl => {
                let stdin = io::stdin();
                repl::run(&guide, stdin.lock(), io::stdout())?;
            }
            Commands::Translate(args) => {
                println!("{}", guide.translate_slang(&joined(&args.text)));
            }
            Commands::Food(args) => {
                println!("{}", guide.recommend_food(&joined(&args.preference)));
            }
            Commands::Traffic(args) => {
                println!("{}", guide.estimate_traffic(&joined(&args.location), args.at));
            }
            Commands::Insight(args) => {
                println!("{}", guide.local_insight(&joined(&args.topic)));
            }
            Commands::Sections => {
                write_snapshot(&guide, io::stdout().lock())?;
            }
        }

        Ok(())
    }
}
