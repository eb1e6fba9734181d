//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! state storage so the engine, the invariants and snapshot loading all
//! derive outcomes the same way.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use super::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// Returns [`Outcome::Win`] for the first completed line in scan order
/// (rows, then columns, then diagonals), [`Outcome::Draw`] for a full board
/// with no completed line, and [`Outcome::InProgress`] otherwise.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
