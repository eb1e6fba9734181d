//! Balanced marks invariant: P1 is never behind, and never more than one ahead.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `count(P1) - count(P2)` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let p1 = state.board().count(Player::P1);
        let p2 = state.board().count(Player::P2);
        p1 == p2 || p1 == p2 + 1
    }

    fn description() -> &'static str {
        "P1 has the same number of marks as P2, or one more"
    }
}
