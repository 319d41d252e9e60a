use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticker_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "ticker")]
#[command(author, version, about = "Inspect ticker character lists and animation plans")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ~/.config/ticker/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the scroll indices between two characters
    Indices {
        /// Character to animate from (empty string for a blank slot)
        start: String,
        /// Character to animate to (empty string for a blank slot)
        end: String,
        /// Only use this list instead of the configured ones
        #[arg(short = 'l', long)]
        list: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Plan the column-by-column transition between two texts
    Plan {
        /// Text shown before the change
        from: String,
        /// Text shown after the change
        to: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the configured character lists
    Lists,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Indices {
            start,
            end,
            list,
            json,
        } => commands::indices::run(&config, &start, &end, list.as_deref(), json),
        Commands::Plan { from, to, json } => commands::plan::run(&config, &from, &to, json),
        Commands::Lists => commands::lists::run(&config),
    }
}
