//! Tic-tac-toe game-state engine.
//!
//! Move validation, turn alternation, win/draw evaluation, and best-effort
//! persistence of the game between sessions. Rendering is left to the
//! caller; [`render()`] provides a plain-text view for terminals.
//!
//! # Architecture
//!
//! - **Engine**: pure transitions over an explicit [`GameState`]
//!   ([`apply_move`], [`reset`], [`evaluate`])
//! - **Persistence**: [`PersistenceAdapter`] writes [`Snapshot`]s to any
//!   [`KeyValueStore`]
//! - **Session**: [`GameEngine`] runs requests and saves after each one
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MemoryStore, Outcome, PersistenceAdapter, Player};
//!
//! let mut engine = GameEngine::new(PersistenceAdapter::new(MemoryStore::new()));
//! for index in [0, 3, 1, 4, 2] {
//!     engine.request_move(index);
//! }
//! assert_eq!(engine.state().outcome().winner(), Some(Player::P1));
//!
//! // Moves after the game ends are ignored.
//! let before = engine.state().clone();
//! engine.request_move(8);
//! assert_eq!(engine.state(), &before);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod persistence;
mod render;
mod session;

// Crate-level exports - Engine
pub use engine::{
    BalancedMarksInvariant, Board, GameInvariants, GameState, Invariant, InvariantSet,
    InvariantViolation, LINES, Line, MoveError, Outcome, OutcomeDerivedInvariant, Player,
    Position, Square, TurnMatchesMarksInvariant, apply_move, evaluate, is_full, reset,
    try_apply_move, winning_line,
};

// Crate-level exports - Persistence
pub use persistence::{
    DEFAULT_STATE_KEY, FileStore, KeyValueStore, MemoryStore, PersistenceAdapter, Snapshot,
    SnapshotError, SnapshotErrorKind, StoreError,
};

// Crate-level exports - Session
pub use session::GameEngine;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Rendering
pub use render::{render, status_line};
