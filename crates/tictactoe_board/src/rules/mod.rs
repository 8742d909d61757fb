//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`BoardState`] snapshot. The board calls
//! [`evaluate_status`] after every accepted move; keeping the rules apart
//! from storage lets them be probed with grids legal play never produces.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winner;

use crate::{BoardState, GameStatus};
use tracing::instrument;

/// Computes the status of a grid.
///
/// Falls back to the turn state named by `x_turn` when no line is complete,
/// including when the grid is full.
#[instrument(skip(state))]
pub fn evaluate_status(state: &BoardState, x_turn: bool) -> GameStatus {
    match find_winner(state) {
        Some(mark) => GameStatus::win_for(mark),
        None => GameStatus::turn(x_turn),
    }
}
