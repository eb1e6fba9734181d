//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// True once all nine squares hold a mark.
///
/// [`evaluate`](super::evaluate) reports a draw only when this holds and no
/// line is complete; the win check always runs first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| s.mark().is_some())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Outcome, Player, Position, Square};
    use super::super::{evaluate, winning_line};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::P1));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_evaluates_to_draw() {
        // P1 P2 P1 / P2 P1 P2 / P2 P1 P2
        let mut board = Board::new();
        for (pos, player) in Position::ALL.into_iter().zip([
            Player::P1,
            Player::P2,
            Player::P1,
            Player::P2,
            Player::P1,
            Player::P2,
            Player::P2,
            Player::P1,
            Player::P2,
        ]) {
            board.set(pos, Square::Occupied(player));
        }
        assert!(is_full(&board));
        assert_eq!(winning_line(&board), None);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // P1 fills the board: full, and the top row wins first.
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::P1));
        }
        assert!(is_full(&board));
        assert!(winning_line(&board).is_some());
        assert!(!evaluate(&board).is_draw());
    }
}
