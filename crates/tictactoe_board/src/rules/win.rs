//! Line detection for tic-tac-toe.
//!
//! Lines are scanned in a fixed order and the first complete one decides:
//! rows 0..3, then columns 0..3, then the two diagonals. Rows and columns
//! test `o` before `x`; the diagonals test `x` first on both diagonals
//! before testing `o`. Under legal play at most one mark can own a line, so
//! the order only shows on injected grids.

use crate::{BOARD_SIZE, BoardState, Cell, Mark};
use tracing::{instrument, trace};

/// Returns true if every cell of `row` holds `mark`.
pub fn row_is(state: &BoardState, row: usize, mark: Mark) -> bool {
    (0..BOARD_SIZE).all(|column| state[row][column] == Cell::Marked(mark))
}

/// Returns true if every cell of `column` holds `mark`.
pub fn column_is(state: &BoardState, column: usize, mark: Mark) -> bool {
    (0..BOARD_SIZE).all(|row| state[row][column] == Cell::Marked(mark))
}

/// Top-left to bottom-right.
pub fn main_diagonal_is(state: &BoardState, mark: Mark) -> bool {
    (0..BOARD_SIZE).all(|i| state[i][i] == Cell::Marked(mark))
}

/// Top-right to bottom-left.
pub fn anti_diagonal_is(state: &BoardState, mark: Mark) -> bool {
    (0..BOARD_SIZE).all(|i| state[BOARD_SIZE - i - 1][i] == Cell::Marked(mark))
}

/// Finds the mark owning the first complete line, if any.
#[instrument(skip(state))]
pub fn find_winner(state: &BoardState) -> Option<Mark> {
    for row in 0..BOARD_SIZE {
        if row_is(state, row, Mark::O) {
            trace!(row, "Row complete for o");
            return Some(Mark::O);
        } else if row_is(state, row, Mark::X) {
            trace!(row, "Row complete for x");
            return Some(Mark::X);
        }
    }

    for column in 0..BOARD_SIZE {
        if column_is(state, column, Mark::O) {
            trace!(column, "Column complete for o");
            return Some(Mark::O);
        } else if column_is(state, column, Mark::X) {
            trace!(column, "Column complete for x");
            return Some(Mark::X);
        }
    }

    if main_diagonal_is(state, Mark::X) || anti_diagonal_is(state, Mark::X) {
        trace!("Diagonal complete for x");
        Some(Mark::X)
    } else if main_diagonal_is(state, Mark::O) || anti_diagonal_is(state, Mark::O) {
        trace!("Diagonal complete for o");
        Some(Mark::O)
    } else {
        None
    }
}
