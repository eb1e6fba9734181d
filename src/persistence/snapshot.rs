//! Serialized form of a [`GameState`].
//!
//! ```json
//! {"board":["P1",null,null,null,"P2",null,null,null,null],
//!  "currentPlayer":"P1","winner":null,"winningLine":[],"isDraw":false}
//! ```
//!
//! Every field is required and unknown fields are rejected, so a record
//! written by a different format version is discarded rather than partially
//! recovered.

use super::error::{SnapshotError, SnapshotErrorKind};
use crate::engine::{Board, GameInvariants, GameState, InvariantSet, Player, Square};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

/// Snapshot record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    board: Vec<Option<Player>>,
    current_player: Player,
    #[serde(deserialize_with = "required")]
    winner: Option<Player>,
    winning_line: Vec<usize>,
    is_draw: bool,
}

/// Deserializes an `Option` without serde's implicit default, so a missing
/// field is an error while an explicit `null` is still `None`.
fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer)
}

impl Snapshot {
    /// Encodes the snapshot as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if serialization fails.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from a JSON string, checking only the record's shape.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] for invalid JSON, missing or unknown fields,
    /// or invalid marks.
    #[instrument(skip(raw), fields(bytes = raw.len()))]
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns the stored winner.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the stored winning line.
    pub fn winning_line(&self) -> &[usize] {
        &self.winning_line
    }

    /// Returns the stored draw flag.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Validates the snapshot and rebuilds the game state.
    ///
    /// The outcome is re-derived from the board; the stored `winner`,
    /// `winningLine` and `isDraw` fields are not trusted.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the board does not have nine cells, the
    /// winning line is malformed, or the position cannot arise from
    /// alternating play starting with P1.
    #[instrument(skip(self))]
    pub fn into_state(self) -> Result<GameState, SnapshotError> {
        let cells: [Option<Player>; 9] = self
            .board
            .as_slice()
            .try_into()
            .map_err(|_| SnapshotError::new(SnapshotErrorKind::BoardLength(self.board.len())))?;

        if self.winning_line.len() > 3 || self.winning_line.iter().any(|&i| i >= 9) {
            return Err(SnapshotError::new(SnapshotErrorKind::WinningLine(
                self.winning_line,
            )));
        }

        let board = Board::from_squares(cells.map(Square::from));
        let state = GameState::from_parts(board, self.current_player);

        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SnapshotError::new(SnapshotErrorKind::Unreachable(descriptions))
        })?;

        let outcome = state.outcome();
        let stored_line = outcome
            .line()
            .map(|line| line.indices().to_vec())
            .unwrap_or_default();
        if outcome.winner() != self.winner
            || stored_line != self.winning_line
            || outcome.is_draw() != self.is_draw
        {
            debug!(
                stored_winner = ?self.winner,
                stored_line = ?self.winning_line,
                stored_draw = self.is_draw,
                derived = ?outcome,
                "Stored outcome disagrees with board, using derived outcome"
            );
        }

        Ok(state)
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let outcome = state.outcome();
        Self {
            board: state.board().squares().iter().map(|s| s.mark()).collect(),
            current_player: state.current_player(),
            winner: outcome.winner(),
            winning_line: outcome
                .line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            is_draw: outcome.is_draw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{apply_move, reset};

    #[test]
    fn test_encodes_expected_fields() {
        let state = apply_move(&reset(), 4);
        let json: serde_json::Value =
            serde_json::from_str(&Snapshot::from(&state).encode().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "board": [null, null, null, null, "P1", null, null, null, null],
                "currentPlayer": "P2",
                "winner": null,
                "winningLine": [],
                "isDraw": false,
            })
        );
    }

    #[test]
    fn test_encodes_win() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(reset(), |s, i| apply_move(&s, i));
        let snapshot = Snapshot::from(&state);
        assert_eq!(snapshot.winner(), Some(Player::P1));
        assert_eq!(snapshot.winning_line(), &[0, 1, 2]);
        assert!(!snapshot.is_draw());
    }

    #[test]
    fn test_missing_winner_rejected() {
        let raw = r#"{"board":[null,null,null,null,null,null,null,null,null],
            "currentPlayer":"P1","winningLine":[],"isDraw":false}"#;
        assert!(Snapshot::decode(raw).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let raw = r#"{"board":[null,null,null,null,null,null,null,null,null],
            "currentPlayer":"P1","winner":null,"winningLine":[],"isDraw":false,"gameOver":false}"#;
        assert!(Snapshot::decode(raw).is_err());
    }

    #[test]
    fn test_invalid_mark_rejected() {
        let raw = r#"{"board":[null,null,null,null,null,null,null,null,null],
            "currentPlayer":"Z","winner":null,"winningLine":[],"isDraw":false}"#;
        assert!(Snapshot::decode(raw).is_err());
    }

    #[test]
    fn test_legacy_labels_accepted() {
        let raw = r#"{"board":["X",null,null,null,"O",null,null,null,"X"],
            "currentPlayer":"O","winner":null,"winningLine":[],"isDraw":false}"#;
        let state = Snapshot::decode(raw).unwrap().into_state().unwrap();
        assert_eq!(state.current_player(), Player::P2);
        assert_eq!(state.board().count(Player::P1), 2);
    }

    #[test]
    fn test_short_board_rejected() {
        let raw = r#"{"board":[null,null,null,null,null],
            "currentPlayer":"P1","winner":null,"winningLine":[],"isDraw":false}"#;
        let err = Snapshot::decode(raw).unwrap().into_state().unwrap_err();
        assert_eq!(err.kind, SnapshotErrorKind::BoardLength(5));
    }

    #[test]
    fn test_stored_outcome_is_rederived() {
        // Claims P2 won, but the board shows nothing of the sort.
        let raw = r#"{"board":["P1",null,null,null,null,null,null,null,null],
            "currentPlayer":"P2","winner":"P2","winningLine":[0,1,2],"isDraw":false}"#;
        let state = Snapshot::decode(raw).unwrap().into_state().unwrap();
        assert!(!state.outcome().is_terminal());
    }

    #[test]
    fn test_unreachable_board_rejected() {
        let raw = r#"{"board":["P1","P1","P1",null,null,null,null,null,null],
            "currentPlayer":"P2","winner":"P1","winningLine":[0,1,2],"isDraw":false}"#;
        let err = Snapshot::decode(raw).unwrap().into_state().unwrap_err();
        assert!(matches!(err.kind, SnapshotErrorKind::Unreachable(_)));
    }
}
