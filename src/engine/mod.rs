//! Tic-tac-toe game-state engine.
//!
//! Pure state transitions over an explicit [`GameState`] value. Persistence
//! lives in [`crate::persistence`]; the session type that ties the two
//! together lives in [`crate::session`].

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::MoveError;
pub use game::{apply_move, reset, try_apply_move};
pub use invariants::{
    BalancedMarksInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    OutcomeDerivedInvariant, TurnMatchesMarksInvariant,
};
pub use position::Position;
pub use rules::{LINES, evaluate, is_full, winning_line};
pub use types::{Board, GameState, Line, Outcome, Player, Square};
