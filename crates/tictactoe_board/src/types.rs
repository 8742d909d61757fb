//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Mark of the player who moves first.
    #[display("x")]
    X,
    /// Mark of the player who moves second.
    #[display("o")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character written into the grid for this mark.
    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = ParseMarkError;

    #[instrument]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' => Ok(Mark::X),
            'o' => Ok(Mark::O),
            found => Err(ParseMarkError { found }),
        }
    }
}

/// A character that is not a valid mark or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invalid board character {:?}", found)]
pub struct ParseMarkError {
    /// The rejected character.
    pub found: char,
}

impl std::error::Error for ParseMarkError {}

/// One square of the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    #[display("_")]
    Empty,
    /// Square holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Grid character for this cell, `_` when empty.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Marked(mark) => mark.to_char(),
        }
    }

    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

impl TryFrom<char> for Cell {
    type Error = ParseMarkError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '_' => Ok(Cell::Empty),
            other => Mark::try_from(other).map(Cell::Marked),
        }
    }
}

/// Snapshot of the grid, indexed `[row][column]`.
pub type BoardState = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Current status of the game.
///
/// There is no draw variant: a full grid without a line keeps reporting
/// the turn state it last computed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameStatus {
    /// X has a full line.
    #[strum(serialize = "X_WINS")]
    #[serde(rename = "X_WINS")]
    XWins,
    /// O has a full line.
    #[strum(serialize = "O_WINS")]
    #[serde(rename = "O_WINS")]
    OWins,
    /// X moves next.
    #[strum(serialize = "X_TURN")]
    #[serde(rename = "X_TURN")]
    XTurn,
    /// O moves next.
    #[strum(serialize = "O_TURN")]
    #[serde(rename = "O_TURN")]
    OTurn,
}

impl GameStatus {
    /// Returns true for the two winning states.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::XWins | GameStatus::OWins)
    }

    /// Mark that must be played next, if the game is still running.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            GameStatus::XTurn => Some(Mark::X),
            GameStatus::OTurn => Some(Mark::O),
            GameStatus::XWins | GameStatus::OWins => None,
        }
    }

    /// Winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWins => Some(Mark::X),
            GameStatus::OWins => Some(Mark::O),
            GameStatus::XTurn | GameStatus::OTurn => None,
        }
    }

    /// Status reporting a win for `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => GameStatus::XWins,
            Mark::O => GameStatus::OWins,
        }
    }

    /// Turn state matching the turn flag.
    pub fn turn(x_turn: bool) -> Self {
        if x_turn {
            GameStatus::XTurn
        } else {
            GameStatus::OTurn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_strings() {
        let names: Vec<String> = GameStatus::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["X_WINS", "O_WINS", "X_TURN", "O_TURN"]);
    }

    #[test]
    fn test_cell_chars_round_trip() {
        for c in ['_', 'x', 'o'] {
            assert_eq!(Cell::try_from(c).unwrap().to_char(), c);
        }
        assert_eq!(Cell::try_from('?'), Err(ParseMarkError { found: '?' }));
    }

    #[test]
    fn test_uppercase_is_not_a_mark() {
        assert!(Mark::try_from('X').is_err());
    }

    #[test]
    fn test_turn_and_winner() {
        assert_eq!(GameStatus::turn(true).to_move(), Some(Mark::X));
        assert_eq!(GameStatus::turn(false).to_move(), Some(Mark::O));
        assert_eq!(GameStatus::win_for(Mark::O).winner(), Some(Mark::O));
        assert!(GameStatus::XWins.is_terminal());
        assert!(!GameStatus::OTurn.is_terminal());
    }
}
