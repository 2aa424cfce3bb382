//! Inner Gatekeeper CLI
//!
//! Usage:
//!   gatekeeper                          - Play an interactive session
//!   gatekeeper play --seed 42           - Play with a fixed visitor sequence
//!   gatekeeper simulate --runs 500      - Headless runs with outcome statistics
//!   gatekeeper catalog                  - List visitors and their effects
//!   gatekeeper init [dir]               - Write a default gatekeeper.yaml

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{CatalogCommand, InitCommand, PlayCommand, SimulateCommand};
use shared::GameConfig;

#[derive(Parser)]
#[command(name = "gatekeeper")]
#[command(about = "Inner Gatekeeper - Decide which thoughts get through the castle gate")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (YAML or JSON); defaults to ./gatekeeper.yaml if present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play(PlayCommand),
    /// Run headless sessions and report outcomes
    Simulate(SimulateCommand),
    /// List the visitor catalog
    Catalog(CatalogCommand),
    /// Write a default configuration file
    Init(InitCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init(cmd)) => cmd.run(),
        Some(Commands::Catalog(cmd)) => cmd.run(&GameConfig::load(cli.config.as_deref())?),
        Some(Commands::Simulate(cmd)) => cmd.run(&GameConfig::load(cli.config.as_deref())?),
        Some(Commands::Play(cmd)) => cmd.run(GameConfig::load(cli.config.as_deref())?).await,
        None => {
            // No subcommand - start interactive mode
            PlayCommand::default()
                .run(GameConfig::load(cli.config.as_deref())?)
                .await
        }
    }
}
