//! Console driver for two tic-tac-toe agents.
//!
//! Builds the agents named in a [`SessionConfig`], alternates them on one
//! [`Board`](tictactoe_board::Board) and reports every half-move through a
//! [`Renderer`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod render;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, OutputFormat, SessionConfig};
pub use error::SessionError;
pub use render::{JsonRenderer, Renderer, TextRenderer, format_grid};
pub use session::{GameRecord, HalfMove, Outcome, Session, play};
