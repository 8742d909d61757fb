//! tictactoe_session - two agents, one board, every move printed.

use anyhow::Result;
use clap::Parser;
use tictactoe_session::{Cli, play};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // stdout carries the game; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config()?;

    let record = play(&config, std::io::stdout().lock())?;
    info!(outcome = %record.outcome(), "Game complete");

    Ok(())
}
