//! Game-state persistence over a key-value store.

use tracing::{debug, info, instrument, warn};

use super::error::StoreError;
use super::snapshot::PersistedState;
use super::store::KeyValueStore;

/// Key the snapshot lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "tictactoe-state-v1";

/// Saves and loads [`PersistedState`] under a single key.
///
/// Neither direction ever fails the caller: write failures are logged and
/// dropped, read failures load as "nothing saved".
#[derive(Debug, Clone)]
pub struct StatePersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StatePersistence<S> {
    /// Binds `store` to `key`.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn new(store: S, key: impl AsRef<str>) -> Self {
        Self {
            store,
            key: key.as_ref().to_string(),
        }
    }

    /// Binds `store` to [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// The key snapshots are written under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrites the stored snapshot with `state`.
    #[instrument(skip(self, state), fields(key = %self.key))]
    pub fn save(&self, state: &PersistedState) {
        let bytes = match serde_json::to_vec(state) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize game state");
                return;
            }
        };
        match self.store.set(&self.key, &bytes) {
            Ok(()) => debug!(bytes = bytes.len(), "Saved game state"),
            Err(e) => warn!(error = %e, "Failed to save game state"),
        }
    }

    /// Reads the stored snapshot.
    ///
    /// Returns `None` if nothing is stored, the store cannot be read, or the
    /// bytes are not a JSON object. Individual invalid fields fall back to
    /// their defaults (see [`PersistedState::recover`]).
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&self) -> Option<PersistedState> {
        let bytes = match self.store.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No saved game state");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read game state");
                return None;
            }
        };
        let value: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Saved game state is not valid JSON");
                return None;
            }
        };
        let state = PersistedState::recover(&value)?;
        info!(active = state.active, starter = %state.starter, "Loaded game state");
        Some(state)
    }

    /// Deletes the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot remove the entry.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)?;
        info!("Cleared saved game state");
        Ok(())
    }
}
