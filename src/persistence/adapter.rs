//! Best-effort persistence of the game state under a fixed key.

use super::error::SnapshotError;
use super::snapshot::Snapshot;
use super::store::KeyValueStore;
use crate::engine::GameState;
use tracing::{debug, info, instrument, warn};

/// Storage key for the current snapshot format.
pub const DEFAULT_STATE_KEY: &str = "ttt:state:v1";

/// Saves and loads [`GameState`] snapshots through a [`KeyValueStore`].
///
/// Holds no game state of its own. Failures never propagate: a failed save
/// is logged and dropped, and a failed load reads as "nothing stored".
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Creates an adapter writing under [`DEFAULT_STATE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STATE_KEY)
    }

    /// Creates an adapter writing under a custom key.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn with_key(store: S, key: impl AsRef<str>) -> Self {
        Self {
            store,
            key: key.as_ref().to_string(),
        }
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the adapter, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Writes a snapshot of `state`, overwriting any previous one.
    ///
    /// Errors are logged and swallowed.
    #[instrument(skip(self, state), fields(key = %self.key))]
    pub fn save(&mut self, state: &GameState) {
        let encoded = match Snapshot::from(state).encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "Failed to encode snapshot, not saving");
                return;
            }
        };

        match self.store.set(&self.key, &encoded) {
            Ok(()) => debug!(bytes = encoded.len(), "Snapshot saved"),
            Err(e) => warn!(error = %e, "Failed to save snapshot"),
        }
    }

    /// Reads and validates the stored snapshot.
    ///
    /// Returns `None` when nothing is stored, the store cannot be read, or
    /// the record is malformed. The caller falls back to a fresh game.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Option<GameState> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No snapshot stored");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read snapshot, treating as empty");
                return None;
            }
        };

        match Self::restore(&raw) {
            Ok(state) => {
                info!(
                    current_player = %state.current_player(),
                    outcome = ?state.outcome(),
                    "Snapshot restored"
                );
                Some(state)
            }
            Err(e) => {
                warn!(error = %e, "Discarding malformed snapshot");
                None
            }
        }
    }

    fn restore(raw: &str) -> Result<GameState, SnapshotError> {
        Snapshot::decode(raw)?.into_state()
    }
}
