//! Wordle Game - CLI
//!
//! Play Wordle in a TUI (default) or in simple line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{check_guess, run_simple},
    config::{GameConfig, Overrides, load_config, resolve},
    game::GameEngine,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word: green = right spot, yellow = wrong spot",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses per game
    #[arg(short, long, global = true)]
    rows: Option<usize>,

    /// Word length
    #[arg(short, long, global = true)]
    cols: Option<usize>,

    /// Word used when no word can be fetched
    #[arg(short, long, global = true)]
    fallback_word: Option<String>,

    /// Random word service URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Pick words from a local list instead of the word service
    #[arg(long, global = true)]
    offline: bool,

    /// Word list file for offline mode (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Word service timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback for a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            rows: self.rows,
            cols: self.cols,
            fallback_word: self.fallback_word.clone(),
            api_url: self.api_url.clone(),
            offline: self.offline,
            timeout_secs: self.timeout_secs,
            word_list: self.word_list.clone(),
        }
    }
}

/// Install the logger: a file when requested, otherwise warnings on stderr
/// for line-mode commands. The TUI owns the terminal, so it gets no stderr
/// logger.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, file);
    } else if !tui {
        let _ = TermLogger::init(
            LevelFilter::Warn,
            log_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
    }
    Ok(())
}

fn load_game_config(cli: &Cli) -> Result<GameConfig> {
    let file = load_config(cli.config.as_deref())?;
    Ok(resolve(&file, &cli.overrides())?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;
    log::info!("wordle_game starting");

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let config = load_game_config(cli)?;
    let engine = GameEngine::from_config(&config)?;
    run_tui(App::new(engine))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let config = load_game_config(cli)?;
    let mut engine = GameEngine::from_config(&config)?;
    run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
