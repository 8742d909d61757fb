//! Command-line interface for tictactoe_session.

use crate::{ConfigError, OutputFormat, SessionConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Plays two tic-tac-toe agents against each other and prints every move
#[derive(Parser, Debug)]
#[command(name = "tictactoe_session")]
#[command(about = "Runs a two-agent tic-tac-toe game to completion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Merges the config file (if any) with command-line overrides.
    #[instrument(skip(self))]
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };

        Ok(match self.format {
            Some(format) => config.with_format(format),
            None => config,
        })
    }
}
