//! Output of game progress.

use crate::{GameRecord, HalfMove, Outcome, SessionError};
use std::io::Write;
use tictactoe_board::BoardState;
use tracing::instrument;

/// Receives game progress from a [`Session`](crate::Session).
pub trait Renderer {
    /// Called after every accepted half-move.
    fn half_move(&mut self, half_move: &HalfMove) -> Result<(), SessionError>;

    /// Called once when the session ends.
    fn finish(&mut self, record: &GameRecord) -> Result<(), SessionError>;
}

/// Formats a grid as three lines of space-separated cells.
///
/// ```
/// use tictactoe_board::BoardState;
/// use tictactoe_session::format_grid;
///
/// assert_eq!(format_grid(&BoardState::default()), "_ _ _\n_ _ _\n_ _ _");
/// ```
pub fn format_grid(state: &BoardState) -> String {
    state
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_char().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the grid and status string after each half-move.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    #[instrument(skip_all, fields(ply = *half_move.ply()))]
    fn half_move(&mut self, half_move: &HalfMove) -> Result<(), SessionError> {
        writeln!(self.out, "{}", format_grid(half_move.board_state()))?;
        writeln!(self.out, "{}", half_move.status())?;
        Ok(())
    }

    fn finish(&mut self, record: &GameRecord) -> Result<(), SessionError> {
        // A win is already visible in the last status line.
        if *record.outcome() == Outcome::Draw {
            writeln!(self.out, "DRAW")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Prints the whole game record as pretty JSON once the game ends.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn half_move(&mut self, _half_move: &HalfMove) -> Result<(), SessionError> {
        Ok(())
    }

    #[instrument(skip_all)]
    fn finish(&mut self, record: &GameRecord) -> Result<(), SessionError> {
        serde_json::to_writer_pretty(&mut self.out, record)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
