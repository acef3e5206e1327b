//! Persistence of game state to a key-value store.

mod adapter;
mod error;
mod file_store;
mod memory_store;
mod snapshot;
mod store;

pub use adapter::{DEFAULT_STORAGE_KEY, StatePersistence};
pub use error::StoreError;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use snapshot::PersistedState;
pub use store::KeyValueStore;
