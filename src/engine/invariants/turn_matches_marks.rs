//! Turn invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: P1 is to move exactly when both players have placed the same
/// number of marks.
///
/// The turn passes after every accepted move, including the one that ends
/// the game, so this holds for finished games too.
pub struct TurnMatchesMarksInvariant;

impl Invariant<GameState> for TurnMatchesMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let even = state.board().count(Player::P1) == state.board().count(Player::P2);
        let expected = if even { Player::P1 } else { Player::P2 };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Player to move is P1 when mark counts are equal, P2 otherwise"
    }
}
