//! Full-grid detection for tic-tac-toe.

use crate::BoardState;
use tracing::instrument;

/// Checks if every square holds a mark.
///
/// The status evaluator does not use this: a full grid with no line keeps
/// its turn status. Callers wanting to end a drawn game check this (or an
/// empty action list) themselves.
#[instrument(skip(state))]
pub fn is_full(state: &BoardState) -> bool {
    state.iter().flatten().all(|cell| !cell.is_empty())
}
