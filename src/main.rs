mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dday_core::collection::{CurrentSort, DisplayMode, PastSort};
use dday_core::config::DdayConfig;
use dday_core::date::{self, parse_date};
use dday_core::format::StorageFormat;
use dday_core::session::Session;
use dday_core::store::EventStore;
use dday_core::{DdayResult, EventId};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "dday")]
#[command(about = "Keep track of the days until (and since) the dates that matter")]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Storage format of the data file (default: from config or file extension)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Pretend today is this date
    #[arg(long, global = true)]
    today: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show events with their countdowns (the default)
    List {
        /// Show events that have already passed
        #[arg(long)]
        past: bool,

        /// Order: urgency or name for upcoming events, date or name for past ones
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Add an event; prompts for anything not given
    Add {
        name: Option<String>,

        /// e.g. 2025-12-25, 2025.12.25, 20251225, 25.12.2025, 12/25/2025
        date: Option<String>,
    },
    /// Change an event's name or date
    Edit {
        id: u64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an event
    #[command(visible_alias = "rm")]
    Delete {
        id: u64,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show how much of the year has passed and the next D-Day
    Progress,
    /// Show configuration paths and values
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for StorageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => StorageFormat::Json,
            FormatArg::Csv => StorageFormat::Csv,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Urgency,
    Name,
    Date,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        eprintln!("{}", format!("{:#}", e).red());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::List { past: false, sort: None });

    // Only `dday config` fails on a broken config file
    let config = match command {
        Commands::Config => DdayConfig::load()?,
        _ => config_or_default(DdayConfig::load()),
    };

    match command {
        Commands::List { past, sort } => {
            let mut session = open_session(&config, cli.file, cli.format, cli.today.as_deref())?;
            let mode = if past { DisplayMode::Past } else { DisplayMode::Current };
            apply_sort(&mut session, mode, sort)?;
            session.set_mode(mode);
            commands::list::run(&session)
        }
        Commands::Add { name, date } => {
            let mut session = open_session(&config, cli.file, cli.format, cli.today.as_deref())?;
            commands::add::run(&mut session, name, date)
        }
        Commands::Edit { id, name, date } => {
            let mut session = open_session(&config, cli.file, cli.format, cli.today.as_deref())?;
            commands::edit::run(&mut session, EventId(id), name, date)
        }
        Commands::Delete { id, yes } => {
            let mut session = open_session(&config, cli.file, cli.format, cli.today.as_deref())?;
            commands::delete::run(&mut session, EventId(id), yes)
        }
        Commands::Progress => {
            let session = open_session(&config, cli.file, cli.format, cli.today.as_deref())?;
            commands::progress::run(&session)
        }
        Commands::Config => {
            let store = resolve_store(&config, cli.file, cli.format);
            commands::config::run(&config, &store)
        }
    }
}

/// Fall back to defaults with a warning when the config cannot be loaded.
fn config_or_default(loaded: DdayResult<DdayConfig>) -> DdayConfig {
    loaded.unwrap_or_else(|e| {
        log::warn!("{}; using default configuration", e);
        DdayConfig::default()
    })
}

/// Data file and format: command line first, then config.
fn resolve_store(config: &DdayConfig, file: Option<PathBuf>, format: Option<FormatArg>) -> EventStore {
    match (file, format) {
        (Some(path), Some(format)) => EventStore::new(path, format.into()),
        (Some(path), None) => EventStore::at(path),
        (None, Some(format)) => EventStore::new(config.data_path(), format.into()),
        (None, None) => config.store(),
    }
}

fn open_session(
    config: &DdayConfig,
    file: Option<PathBuf>,
    format: Option<FormatArg>,
    today: Option<&str>,
) -> Result<Session> {
    let today = match today {
        Some(input) => parse_date(input).context("Invalid --today")?,
        None => date::today(),
    };

    let store = resolve_store(config, file, format);
    log::debug!("Using {} ({})", store.path().display(), store.format());

    Ok(Session::open(store, today).with_sorts(config.default_sort, config.default_past_sort))
}

fn apply_sort(session: &mut Session, mode: DisplayMode, sort: Option<SortArg>) -> Result<()> {
    let Some(sort) = sort else {
        return Ok(());
    };

    match (mode, sort) {
        (DisplayMode::Current, SortArg::Urgency) => session.set_current_sort(CurrentSort::Urgency),
        (DisplayMode::Current, SortArg::Name) => session.set_current_sort(CurrentSort::Alphabetical),
        (DisplayMode::Past, SortArg::Date) => session.set_past_sort(PastSort::Date),
        (DisplayMode::Past, SortArg::Name) => session.set_past_sort(PastSort::Alphabetical),
        (DisplayMode::Current, SortArg::Date) => {
            anyhow::bail!("--sort date only applies to past events (use --past)")
        }
        (DisplayMode::Past, SortArg::Urgency) => {
            anyhow::bail!("--sort urgency only applies to upcoming events")
        }
    }

    Ok(())
}
