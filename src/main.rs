//! Wordle - CLI
//!
//! Play in a TUI (default) or a line-based text mode; statistics persist
//! between runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, run_stats},
    config::GameConfig,
    game::DEFAULT_MAX_HINTS,
    interactive::{App, run_tui},
    stats::{FileStore, StatsTracker},
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hints available per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_HINTS)]
    hints: u8,

    /// Seed for reproducible secrets and hints
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Extra guess-only words, one per line
    #[arg(long, global = true, value_name = "FILE")]
    allowed: Option<PathBuf>,

    /// Secret words, one per line (replaces the built-in lists)
    #[arg(long, global = true, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Directory for the statistics file
    #[arg(long, global = true, value_name = "DIR")]
    stats_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without TUI
    Simple,

    /// Show saved statistics
    Stats {
        /// Erase all saved statistics
        #[arg(long)]
        reset: bool,
    },
}

/// Build the word bank from the command line lists, or the built-in ones
fn load_word_bank(cli: &Cli) -> Result<WordBank> {
    let bank = match &cli.answers {
        Some(answers) => WordBank::from_files(cli.allowed.as_deref(), answers)?,
        None if cli.allowed.is_some() => {
            anyhow::bail!("--allowed requires --answers")
        }
        None => WordBank::embedded()?,
    };
    Ok(bank)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();

    let store = cli
        .stats_dir
        .as_ref()
        .map_or_else(FileStore::new, FileStore::with_dir);
    log::debug!("statistics directory: {}", store.dir().display());
    let stats = StatsTracker::load(store);

    let config = GameConfig {
        max_hints: cli.hints,
        seed: cli.seed,
    };

    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let bank = load_word_bank(&cli).context("failed to load word lists")?;
            run_tui(App::new(&bank, config, stats))
        }
        Commands::Simple => {
            let bank = load_word_bank(&cli).context("failed to load word lists")?;
            run_simple(&bank, config, stats)
        }
        Commands::Stats { reset } => run_stats(stats, *reset),
    }
}
