use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hallboard_core::{AppConfig, ScrollMode};

mod commands;

#[derive(Parser)]
#[command(name = "hallboard")]
#[command(author, version, about = "A meeting-room status board for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the board (default)
    Run {
        /// Meeting list presentation
        #[arg(short = 'm', long, value_enum)]
        mode: Option<ModeArg>,
        /// Use the basic carousel that rotates one card at a time
        #[arg(long)]
        no_enhanced: bool,
        /// Initial room status: available, engaged or upcoming
        #[arg(short = 's', long)]
        status: Option<String>,
        /// Cycle through the statuses on a timer
        #[arg(long)]
        demo: bool,
    },
    /// Convert a Gregorian date to the Hijri calendar
    Hijri {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short = 'd', long)]
        date: Option<NaiveDate>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the meetings the board shows
    Meetings,
    /// Show the config file location and effective settings
    Config {
        /// Write the default configuration if no config file exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Table,
    Carousel,
}

impl From<ModeArg> for ScrollMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Table => ScrollMode::Table,
            ModeArg::Carousel => ScrollMode::Carousel,
        }
    }
}

/// Initialize logging. While the board owns the terminal, log lines go to a
/// file in the data directory; otherwise to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let data_dir = config.data_dir();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;
        let log_path = config.log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("opening log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load().context("loading config")?,
    };

    let command = cli.command.unwrap_or(Commands::Run {
        mode: None,
        no_enhanced: false,
        status: None,
        demo: false,
    });

    init_logging(&config, matches!(command, Commands::Run { .. }))?;

    // Handle commands
    match command {
        Commands::Run {
            mode,
            no_enhanced,
            status,
            demo,
        } => {
            let options = commands::run::RunOptions {
                mode: mode.map(ScrollMode::from),
                no_enhanced,
                status,
                demo,
            };
            commands::run::run(config, options)
        }
        Commands::Hijri { date, json } => commands::hijri::run(date, json),
        Commands::Meetings => commands::meetings::run(&config),
        Commands::Config { init } => commands::config::run(&config, cli.config.as_deref(), init),
    }
}
