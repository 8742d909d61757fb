//! Tic-tac-toe board state machine.
//!
//! This crate holds the rules side of a two-agent tic-tac-toe simulation.
//!
//! # Architecture
//!
//! - **Board**: owns the 3x3 grid, the turn flag and the [`GameStatus`]; the
//!   only place a cell can change
//! - **Rules**: pure status evaluation over a [`BoardState`] snapshot
//! - **Agents**: policies that look at a borrowed [`Board`] and propose an
//!   [`Action`]
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Agent, Board, FirstAvailableAgent, GameStatus};
//!
//! let mut board = Board::new();
//! let agent = FirstAvailableAgent::new("first");
//!
//! let action = agent.get_action(&board).expect("empty board has moves");
//! board.apply_action(action)?;
//! assert_eq!(board.game_status(), GameStatus::OTurn);
//! # Ok::<(), tictactoe_board::ActionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod agent;
mod board;
pub mod rules;
mod types;

pub use action::{Action, ActionError};
pub use agent::{Agent, AgentKind, FirstAvailableAgent};
pub use board::Board;
pub use types::{BOARD_SIZE, BoardState, Cell, GameStatus, Mark, ParseMarkError};
