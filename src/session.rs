//! Game session: the engine's state plus its persistence.

use crate::engine::{self, GameState, MoveError};
use crate::persistence::{KeyValueStore, PersistenceAdapter};
use tracing::{debug, info, instrument};

/// A single game session.
///
/// Owns the current [`GameState`] and saves a snapshot after every
/// accepted move and after every reset. Requests are handled one at a
/// time, each running to completion before the next.
#[derive(Debug)]
pub struct GameEngine<S: KeyValueStore> {
    state: GameState,
    persistence: PersistenceAdapter<S>,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Starts a session, restoring the stored game or starting a fresh one.
    ///
    /// A fresh game is saved straight away, replacing any unreadable record.
    #[instrument(skip(persistence), fields(key = %persistence.key()))]
    pub fn new(mut persistence: PersistenceAdapter<S>) -> Self {
        let state = match persistence.load() {
            Some(state) => state,
            None => {
                info!("Starting a fresh game");
                let state = engine::reset();
                persistence.save(&state);
                state
            }
        };
        Self { state, persistence }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the persistence adapter.
    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Requests a move at `index`.
    ///
    /// Invalid requests leave the state untouched and write nothing.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn request_move(&mut self, index: usize) -> &GameState {
        if let Err(reason) = self.try_request_move(index) {
            debug!(%reason, "Move request ignored");
        }
        &self.state
    }

    /// Requests a move at `index`, reporting why an invalid one was ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] describing the rejection; the state is
    /// unchanged in that case.
    #[instrument(skip(self))]
    pub fn try_request_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        self.state = engine::try_apply_move(&self.state, index)?;
        self.persistence.save(&self.state);
        info!(index, outcome = ?self.state.outcome(), "Move accepted");
        Ok(&self.state)
    }

    /// Starts a new game and saves it.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) -> &GameState {
        self.state = engine::reset();
        self.persistence.save(&self.state);
        info!("Game reset");
        &self.state
    }

    /// Ends the session, returning the persistence adapter.
    pub fn into_persistence(self) -> PersistenceAdapter<S> {
        self.persistence
    }
}
