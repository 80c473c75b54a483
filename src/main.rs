//! Wordle Daily - CLI
//!
//! Daily Wordle with TUI and line modes. Progress is saved per local day.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use wordle_daily::{
    commands::{GameContext, Overrides, run_score, run_simple, run_status},
    config::Config,
    daily::DayIdentity,
    logging,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Play the daily Wordle in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Never fetch; use the cached or fallback solution
    #[arg(long, global = true)]
    offline: bool,

    /// Keep game state in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Directory for saved games and logs (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Play a specific day instead of today
    #[arg(long, global = true, value_name = "YYYY-MM-DD", value_parser = parse_day)]
    date: Option<DayIdentity>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show today's board without playing
    Status,

    /// Score a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The solution to score against
        solution: String,
    },
}

fn parse_day(s: &str) -> Result<DayIdentity, String> {
    DayIdentity::parse(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    init_logging(&command, &config, cli.verbose)?;

    let overrides = Overrides {
        offline: cli.offline,
        ephemeral: cli.ephemeral,
        date: cli.date,
    };

    match command {
        Commands::Play => run_play_command(&GameContext::new(&config, overrides)?),
        Commands::Simple => run_simple(&GameContext::new(&config, overrides)?),
        Commands::Status => {
            run_status(&GameContext::new(&config, overrides)?);
            Ok(())
        }
        Commands::Score { guess, solution } => run_score(&guess, &solution),
    }
}

/// The TUI owns the terminal, so it logs to a file in the data directory
fn init_logging(command: &Commands, config: &Config, verbosity: u8) -> Result<()> {
    if !matches!(command, Commands::Play) {
        return logging::init_stderr(verbosity);
    }

    let to_file = config
        .data_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| logging::init_file(verbosity, &dir));

    if let Err(e) = to_file {
        logging::init_stderr(verbosity)?;
        warn!("logging to stderr: {e:#}");
    }
    Ok(())
}

fn run_play_command(ctx: &GameContext) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(ctx);
    run_tui(app)
}
