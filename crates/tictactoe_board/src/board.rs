//! The tic-tac-toe board state machine.

use crate::rules::{self, evaluate_status};
use crate::{Action, ActionError, BOARD_SIZE, BoardState, Cell, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A 3x3 board together with whose turn it is and the game status.
///
/// [`Board::apply_action`] is the only way to change a cell.
///
/// Deserializing reads only the grid and the turn flag; the status is
/// always recomputed, so a stored status never overrides the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardSnapshot")]
pub struct Board {
    state: BoardState,
    status: GameStatus,
    x_turn: bool,
}

impl Board {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self {
            state: BoardState::default(),
            status: GameStatus::XTurn,
            x_turn: true,
        };
        board.reset();
        board
    }

    /// Installs an arbitrary grid and evaluates its status.
    ///
    /// Nothing checks that the grid is reachable by legal play, so this can
    /// build positions where several lines are complete at once.
    #[instrument]
    pub fn from_state(state: BoardState, x_turn: bool) -> Self {
        let status = evaluate_status(&state, x_turn);
        debug!(%status, "Board installed from snapshot");
        Self {
            state,
            status,
            x_turn,
        }
    }

    /// Returns a copy of the grid.
    pub fn board_state(&self) -> BoardState {
        self.state
    }

    /// Returns the cell at `(row, column)`, or `None` off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.state.get(row)?.get(column).copied()
    }

    /// Clears the grid and hands the move to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.status = GameStatus::XTurn;
        self.state = BoardState::default();
        self.x_turn = true;
        debug!("Board reset");
    }

    /// Checks an action against the current position.
    ///
    /// Checks run in order: game over, turn, bounds, occupancy. The first
    /// failure is returned.
    #[instrument(skip(self), fields(action = %action))]
    pub fn check_action(&self, action: &Action) -> Result<(), ActionError> {
        let Some(expected) = self.status.to_move() else {
            return Err(ActionError::GameOver);
        };

        if action.mark != expected {
            return Err(ActionError::WrongTurn {
                expected,
                got: action.mark,
            });
        }

        let Some(occupant) = self.cell(action.row, action.column) else {
            return Err(ActionError::OutOfBounds {
                row: action.row,
                column: action.column,
            });
        };

        if !occupant.is_empty() {
            return Err(ActionError::Occupied {
                row: action.row,
                column: action.column,
                occupant,
            });
        }

        Ok(())
    }

    /// Returns true if `action` could be applied now. Never mutates.
    #[instrument(skip(self), fields(action = %action))]
    pub fn is_action_valid(&self, action: &Action) -> bool {
        match self.check_action(action) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Action is not valid");
                false
            }
        }
    }

    /// Every empty cell, row-major, stamped with the mark of the player to move.
    ///
    /// Empty once the game is won or the grid is full.
    #[instrument(skip(self))]
    pub fn available_actions(&self) -> Vec<Action> {
        let Some(mark) = self.status.to_move() else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                if self.state[row][column].is_empty() {
                    actions.push(Action::new(row, column, mark));
                }
            }
        }
        debug!(count = actions.len(), "Available actions");
        actions
    }

    /// Applies `action` if it is valid.
    ///
    /// On success the mark is written, the turn passes and the status is
    /// recomputed over the whole grid. On failure the board is untouched.
    #[instrument(skip(self), fields(action = %action))]
    pub fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        debug!("Trying to apply action");

        if let Err(e) = self.check_action(&action) {
            warn!(error = %e, "Invalid action rejected");
            return Err(e);
        }

        self.state[action.row][action.column] = Cell::Marked(action.mark);
        self.x_turn = !self.x_turn;
        self.status = evaluate_status(&self.state, self.x_turn);

        if self.status.is_terminal() {
            info!(status = %self.status, "Game over");
        } else {
            debug!(status = %self.status, "Action applied");
        }
        Ok(())
    }

    /// Returns the current status.
    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    /// True once either player has completed a line.
    ///
    /// A drawn grid is not game over; see [`Board::is_stalemate`].
    pub fn game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// True when X moves next.
    pub fn x_turn(&self) -> bool {
        self.x_turn
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.state)
    }

    /// True when the status names a turn but nobody can move.
    ///
    /// This is the drawn-game signal; [`Board::game_over`] stays false.
    pub fn is_stalemate(&self) -> bool {
        !self.game_over() && self.is_full()
    }
}

/// Serialized form accepted when reading a board back.
#[derive(Deserialize)]
struct BoardSnapshot {
    state: BoardState,
    x_turn: bool,
}

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        Board::from_state(snapshot.state, snapshot.x_turn)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_new_board_is_reset() {
        let board = Board::new();
        assert_eq!(board.game_status(), GameStatus::XTurn);
        assert!(board.x_turn());
        assert!(board.board_state().iter().flatten().all(|c| c.is_empty()));
    }

    #[test]
    fn test_apply_flips_turn() {
        let mut board = Board::new();
        board.apply_action(Action::new(1, 1, Mark::X)).unwrap();
        assert_eq!(board.cell(1, 1), Some(Cell::Marked(Mark::X)));
        assert!(!board.x_turn());
        assert_eq!(board.game_status(), GameStatus::OTurn);
    }

    #[test]
    fn test_check_order_game_over_first() {
        let x = Cell::Marked(Mark::X);
        let board = Board::from_state([[x, x, x]; 3], false);
        // Wrong mark, off the board and occupied all at once; game over wins.
        assert_eq!(
            board.check_action(&Action::new(5, 5, Mark::X)),
            Err(ActionError::GameOver)
        );
    }

    #[test]
    fn test_check_order_turn_before_bounds() {
        let board = Board::new();
        assert_eq!(
            board.check_action(&Action::new(3, 0, Mark::O)),
            Err(ActionError::WrongTurn {
                expected: Mark::X,
                got: Mark::O,
            })
        );
    }

    #[test]
    fn test_cell_off_board() {
        let board = Board::new();
        assert_eq!(board.cell(0, 3), None);
        assert_eq!(board.cell(3, 0), None);
    }

    #[test]
    fn test_reset_after_win() {
        let mut board = Board::new();
        for action in [
            Action::new(0, 0, Mark::X),
            Action::new(1, 0, Mark::O),
            Action::new(0, 1, Mark::X),
            Action::new(1, 1, Mark::O),
            Action::new(0, 2, Mark::X),
        ] {
            board.apply_action(action).unwrap();
        }
        assert!(board.game_over());

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.available_actions().len(), 9);
    }
}
