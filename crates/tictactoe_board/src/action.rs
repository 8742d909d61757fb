//! Proposed moves and the reasons a board refuses them.
//!
//! An [`Action`] is only a proposal. It changes nothing until
//! [`Board::apply_action`](crate::Board::apply_action) accepts it.

use super::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a zero-based `(row, column)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row index, valid range `0..3`.
    pub row: usize,
    /// Column index, valid range `0..3`.
    pub column: usize,
    /// Mark to write.
    pub mark: Mark,
}

impl Action {
    /// Creates a new action.
    #[instrument]
    pub fn new(row: usize, column: usize, mark: Mark) -> Self {
        Self { row, column, mark }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.row, self.column, self.mark)
    }
}

/// Reason an action was rejected.
///
/// Variants are listed in the order the board checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// Someone already completed a line.
    #[display("Game is already over")]
    GameOver,

    /// The mark does not belong to the player whose turn it is.
    #[display("Wrong turn: expected {}, got {}", expected, got)]
    WrongTurn {
        /// Mark the current turn requires.
        expected: Mark,
        /// Mark the action carried.
        got: Mark,
    },

    /// Row or column outside the grid.
    #[display("Position ({}, {}) is off the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The target cell already holds a mark.
    #[display("Tried to take a move on an occupied space ({}, {}) holding {}", row, column, occupant)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// What is already there.
        occupant: Cell,
    },
}

impl std::error::Error for ActionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::new(0, 1, Mark::O).to_string(), "{0, 1, o}");
        assert_eq!(Action::new(2, 2, Mark::X).to_string(), "{2, 2, x}");
    }

    #[test]
    fn test_error_messages() {
        let wrong = ActionError::WrongTurn {
            expected: Mark::X,
            got: Mark::O,
        };
        assert_eq!(wrong.to_string(), "Wrong turn: expected x, got o");

        let occupied = ActionError::Occupied {
            row: 1,
            column: 1,
            occupant: Cell::Marked(Mark::X),
        };
        assert!(occupied.to_string().contains("occupied"));
        assert!(occupied.to_string().ends_with('x'));
    }
}
