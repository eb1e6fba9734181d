//! Persistence error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Key-value store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Why a snapshot was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotErrorKind {
    /// The stored string is not a well-formed snapshot record.
    #[display("Malformed snapshot: {}", _0)]
    Malformed(String),
    /// The board does not have exactly nine cells.
    #[display("Board has {} cells, expected 9", _0)]
    BoardLength(usize),
    /// The winning line is not a list of at most three board indices.
    #[display("Winning line {:?} is not a valid line", _0)]
    WinningLine(Vec<usize>),
    /// The board cannot be reached by alternating play.
    #[display("Unreachable board: {}", _0)]
    Unreachable(String),
}

/// Snapshot encoding or validation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Snapshot error: {} at {}:{}", kind, file, line)]
pub struct SnapshotError {
    /// What went wrong.
    pub kind: SnapshotErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SnapshotError {
    /// Creates a new snapshot error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SnapshotErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(SnapshotErrorKind::Malformed(err.to_string()))
    }
}
