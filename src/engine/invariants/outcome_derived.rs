//! Outcome invariant: the stored outcome is what the rules say about the board.

use super::super::{GameState, evaluate};
use super::Invariant;

/// Invariant: `outcome == evaluate(board)`.
pub struct OutcomeDerivedInvariant;

impl Invariant<GameState> for OutcomeDerivedInvariant {
    fn holds(state: &GameState) -> bool {
        *state.outcome() == evaluate(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches evaluation of the board"
    }
}
