//! Snapshot persistence for the game state.

mod adapter;
mod error;
mod snapshot;
mod store;

pub use adapter::{DEFAULT_STATE_KEY, PersistenceAdapter};
pub use error::{SnapshotError, SnapshotErrorKind, StoreError};
pub use snapshot::Snapshot;
pub use store::{FileStore, KeyValueStore, MemoryStore};
