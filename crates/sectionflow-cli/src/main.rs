use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sectionflow_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "sectionflow")]
#[command(author, version, about = "Full-screen section-by-section presenter")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck to present (shorthand for `run`)
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck in the terminal
    Run {
        /// Markdown-like deck file, sections separated by `---`
        deck: PathBuf,
    },
    /// Play a scripted input stream through the navigator without a terminal
    Replay {
        /// Number of blank sections to navigate
        #[arg(long, conflicts_with = "deck", required_unless_present = "deck")]
        sections: Option<usize>,
        /// Deck whose sections are navigated
        #[arg(long)]
        deck: Option<PathBuf>,
        /// JSON Lines input script
        #[arg(long)]
        script: PathBuf,
        /// Playback speed multiplier for the script timestamps
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config {
        /// Write it to the config path
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { deck }) => {
            init_file_logging(&config)?;
            commands::run::run(config, &deck).await
        }
        None => match cli.deck {
            Some(deck) => {
                init_file_logging(&config)?;
                commands::run::run(config, &deck).await
            }
            None => {
                eprintln!("No deck given. Try `sectionflow run <DECK>` or `sectionflow --help`.");
                Ok(())
            }
        },
        Some(Commands::Replay {
            sections,
            deck,
            script,
            speed,
            json,
        }) => {
            init_stderr_logging(&config);
            let source = match (sections, deck) {
                (_, Some(deck)) => commands::replay::Source::Deck(deck),
                (Some(count), None) => commands::replay::Source::Sections(count),
                (None, None) => bail!("either --sections or --deck is required"),
            };
            commands::replay::run(&config, source, &script, speed, json).await
        }
        Some(Commands::Config { write }) => {
            init_stderr_logging(&config);
            commands::config::run(&config, write)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()))
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// The presenter owns the terminal, so logs go to `<data_dir>/sectionflow.log`
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
    Ok(())
}
