//! Daily Wordle - CLI
//!
//! Daily word-guessing game with a TUI play mode and an admin surface for
//! word pools, secrets and scoring settings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    commands::{guess, secret, seed, settings, status, words},
    core::GameDay,
    engine::GameEngine,
    interactive::{App, run_tui},
    pools::PoolKind,
    store::SqliteStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily word-guessing game: six guesses, one secret per day, streaks and points",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Database path (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Acting user name
    #[arg(short, long, global = true, default_value = "player")]
    user: String,

    /// UTC offset defining your calendar day, e.g. '+05:30' (defaults to UTC)
    #[arg(short, long, global = true)]
    timezone: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Submit one guess for today's puzzle
    Guess {
        /// The 5-letter word to guess
        word: String,
    },

    /// Show today's board, streak and pool health
    Status,

    /// Reveal today's finished round (secret included)
    Result,

    /// Seed the word pools from the embedded lists
    Seed,

    /// Administer the word pools
    Words {
        #[command(subcommand)]
        action: WordsAction,
    },

    /// Administer the daily secret schedule
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Show or change score settings
    Settings {
        /// Overrides as key=value (e.g. base_solve_points=20 attempt_bonus=6,5,4,3,2,1)
        #[arg(value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
}

#[derive(Subcommand)]
enum WordsAction {
    /// Add a word to a pool
    Add {
        word: String,
        /// Add to the validation pool instead of the answer pool
        #[arg(long)]
        validation: bool,
    },
    /// Remove a word from the answer pool (moderation)
    Remove { word: String },
    /// Bulk-import a word list file (word[,origin] per line)
    Import {
        file: PathBuf,
        /// Import into the validation pool instead of the answer pool
        #[arg(long)]
        validation: bool,
    },
    /// Export a pool
    Export {
        /// Export the validation pool instead of the answer pool
        #[arg(long)]
        validation: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List a pool's words
    List {
        /// List the validation pool instead of the answer pool
        #[arg(long)]
        validation: bool,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Assign (or override) the secret for a day
    Set {
        word: String,
        /// Day as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Show recent secret assignments
    List {
        /// How many days to show
        #[arg(short, long, default_value = "14")]
        limit: usize,
    },
}

fn pool_kind(validation: bool) -> PoolKind {
    if validation {
        PoolKind::Validation
    } else {
        PoolKind::Answer
    }
}

/// Resolve the database path, creating parent directories as needed
fn database_path(cli_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match cli_path {
        Some(path) => path,
        None => dirs::data_dir()
            .context("could not determine a data directory; pass --db")?
            .join("wordle_daily")
            .join("game.db"),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(path)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let db_path = database_path(cli.db)?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    let engine = GameEngine::new(store);

    let timezone = cli.timezone.as_deref();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&engine, cli.user.as_str(), cli.timezone.clone())?;
            run_tui(app)
        }
        Commands::Guess { word } => Ok(guess::run_guess(&engine, &cli.user, timezone, &word)?),
        Commands::Status => Ok(status::run_status(&engine, &cli.user, timezone)?),
        Commands::Result => Ok(status::run_result(&engine, &cli.user, timezone)?),
        Commands::Seed => Ok(seed::run_seed(&engine)?),
        Commands::Words { action } => run_words_command(&engine, action),
        Commands::Secret { action } => run_secret_command(&engine, action, timezone),
        Commands::Settings { overrides } => {
            if overrides.is_empty() {
                Ok(settings::run_show(&engine)?)
            } else {
                Ok(settings::run_set(&engine, &overrides)?)
            }
        }
    }
}

fn run_words_command(engine: &GameEngine<SqliteStore>, action: WordsAction) -> Result<()> {
    match action {
        WordsAction::Add { word, validation } => {
            Ok(words::run_add(engine, &word, pool_kind(validation))?)
        }
        WordsAction::Remove { word } => Ok(words::run_remove(engine, &word)?),
        WordsAction::Import { file, validation } => {
            Ok(words::run_import(engine, &file, pool_kind(validation))?)
        }
        WordsAction::Export { validation, out } => {
            Ok(words::run_export(engine, pool_kind(validation), out.as_deref())?)
        }
        WordsAction::List { validation } => Ok(words::run_list(engine, pool_kind(validation))?),
    }
}

fn run_secret_command(
    engine: &GameEngine<SqliteStore>,
    action: SecretAction,
    timezone: Option<&str>,
) -> Result<()> {
    match action {
        SecretAction::Set { word, day } => {
            let day = day
                .map(|text| {
                    text.parse::<GameDay>()
                        .with_context(|| format!("invalid day '{text}', expected YYYY-MM-DD"))
                })
                .transpose()?;
            Ok(secret::run_set(engine, day, &word, timezone)?)
        }
        SecretAction::List { limit } => Ok(secret::run_list(engine, limit, timezone)?),
    }
}
