//! attacksim CLI - Command Line Operations for Attack Penetration Simulation
//!
//! This is the operational entry point for the attacksim engine.
//!
//! # Commands
//!
//! - `attacksim simulate <model>` - Generate paths and summarise final values
//! - `attacksim simulate --from-config` - Run the `[simulation]` table of the config
//! - `attacksim models` - List available models
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate reads parameters from flags,
//! the config file and the environment, hands a validated request to
//! `attack_engine` and renders the result.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::simulate::SimulateArgs;
use config::AppConfig;

/// Attack penetration path simulator CLI
#[derive(Parser)]
#[command(name = "attacksim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: attacksim.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an ensemble of paths and summarise its final values
    Simulate(SimulateArgs),

    /// List available models and their parameters
    Models,
}

/// Initialise tracing on stderr so stdout carries only rendered output.
fn init_tracing(log_level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app = AppConfig::load_with_env_and_validate(cli.config.as_deref())?;
    init_tracing(&app.log_level, cli.verbose);

    if cli.verbose {
        debug!(?app, "Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(&args, &app),
        Commands::Models => commands::models::run(),
    }
}
