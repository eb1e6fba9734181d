//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties every reachable [`GameState`] satisfies.
//! The engine asserts them after each transition in debug builds, and
//! snapshot loading uses them to reject boards no sequence of moves can
//! produce.
//!
//! [`GameState`]: super::GameState

mod balanced_marks;
mod outcome_derived;
mod turn_matches_marks;

pub use balanced_marks::BalancedMarksInvariant;
pub use outcome_derived::OutcomeDerivedInvariant;
pub use turn_matches_marks::TurnMatchesMarksInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    TurnMatchesMarksInvariant,
    OutcomeDerivedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, GameState, Player, Position, Square, apply_move, reset};

    #[test]
    fn test_fresh_game_satisfies_all() {
        assert!(GameInvariants::check_all(&reset()).is_ok());
    }

    #[test]
    fn test_played_game_satisfies_all() {
        let state = [4, 0, 8, 2, 1, 7, 6, 3, 5]
            .into_iter()
            .fold(reset(), |s, i| apply_move(&s, i));
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        // Two P2 marks and no P1 marks, with P1 to move.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::P2));
        board.set(Position::Center, Square::Occupied(Player::P2));
        let state = GameState::from_parts(board, Player::P1);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            BalancedMarksInvariant::description()
        );
        assert_eq!(
            violations[1].description,
            TurnMatchesMarksInvariant::description()
        );
    }
}
