//! State transitions for tic-tac-toe.
//!
//! Every transition takes a [`GameState`] by reference and returns a new
//! one; nothing here touches storage.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::{GameState, Position};
use tracing::{debug, instrument};

/// Validates and applies a move at `index`, reporting why a move is rejected.
///
/// On success the current player's mark is placed, the outcome is
/// re-evaluated and the turn passes to the opponent. The turn passes even
/// when the move ends the game.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the outcome is already terminal
/// - [`MoveError::OutOfRange`] if `index` is not in 0-8
/// - [`MoveError::SquareOccupied`] if the square is taken
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn try_apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    if state.outcome().is_terminal() {
        return Err(MoveError::GameOver);
    }

    let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

    if !state.board().is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    let mut next = state.clone();
    next.place(pos, state.current_player());

    debug_assert!(
        GameInvariants::check_all(&next).is_ok(),
        "Invariant violated after move"
    );

    debug!(position = %pos, outcome = ?next.outcome(), "Move applied");
    Ok(next)
}

/// Applies a move at `index`, treating invalid moves as no-ops.
///
/// Returns the unchanged state when the index is out of range, the square
/// is occupied, or the game is over.
#[instrument(skip(state))]
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    try_apply_move(state, index).unwrap_or_else(|reason| {
        debug!(index, %reason, "Move ignored");
        state.clone()
    })
}

/// Returns a fresh game: empty board, P1 to move, in progress.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Outcome, Player, Square, evaluate};

    fn play(indices: &[usize]) -> GameState {
        indices.iter().fold(reset(), |state, &i| apply_move(&state, i))
    }

    #[test]
    fn test_center_move_on_empty_board() {
        let next = apply_move(&reset(), 4);
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::P1));
        assert_eq!(next.current_player(), Player::P2);
        assert_eq!(next.outcome(), &Outcome::InProgress);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let state = play(&[4]);
        assert_eq!(apply_move(&state, 4), state);
        assert_eq!(
            try_apply_move(&state, 4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let state = play(&[0, 4]);
        assert_eq!(apply_move(&state, 9), state);
        assert_eq!(apply_move(&state, usize::MAX), state);
        assert_eq!(try_apply_move(&state, 9), Err(MoveError::OutOfRange(9)));
    }

    #[test]
    fn test_turn_flips_after_winning_move() {
        // P1: 0, 1, 2  P2: 3, 4
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.outcome().winner(), Some(Player::P1));
        assert_eq!(state.current_player(), Player::P2);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(try_apply_move(&state, 8), Err(MoveError::GameOver));
        assert_eq!(apply_move(&state, 8), state);
    }

    #[test]
    fn test_full_game_to_draw() {
        let state = play(&[0, 4, 2, 1, 3, 5, 7, 6, 8]);
        assert!(state.outcome().is_draw());
        assert_eq!(apply_move(&state, 0), state);
    }

    #[test]
    fn test_reset_is_in_progress() {
        let state = reset();
        assert_eq!(evaluate(state.board()), Outcome::InProgress);
        assert_eq!(state.current_player(), Player::P1);
        assert_eq!(state.board(), &crate::engine::Board::new());
    }

    #[test]
    fn test_mark_difference_stays_balanced() {
        // Includes repeated and out-of-range requests.
        let requests = [4, 4, 0, 11, 8, 0, 2, 6, 3, 5, 1, 7];
        let mut state = reset();
        for index in requests {
            state = apply_move(&state, index);
            let p1 = state.board().count(Player::P1);
            let p2 = state.board().count(Player::P2);
            assert!(p1 == p2 || p1 == p2 + 1, "p1={} p2={}", p1, p2);
        }
    }
}
