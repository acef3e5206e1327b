//! Tests for state persistence and the key-value stores.

use tempfile::TempDir;
use tictactally::{
    DEFAULT_ROUND_END_DELAY, FileStore, GameEngine, KeyValueStore, ManualClock, Mark, MemoryStore,
    PersistedState, Position, Scores, Square, StatePersistence, StoreError,
};

/// Store that rejects every operation, like a full or unavailable disk.
#[derive(Debug)]
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Err(StoreError::new("store unavailable"))
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::new("quota exceeded"))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::new("store unavailable"))
    }
}

fn sample_state() -> PersistedState {
    let mut state = PersistedState {
        current_turn: Mark::O,
        active: true,
        scores: Scores::new(3, 5),
        starter: Mark::X,
        ..PersistedState::default()
    };
    state.board.set(Position::Center, Square::Occupied(Mark::X));
    state
}

#[test]
fn test_load_missing_is_none() {
    let persistence = StatePersistence::with_default_key(MemoryStore::new());
    assert_eq!(persistence.load(), None);
}

#[test]
fn test_memory_round_trip() {
    let persistence = StatePersistence::with_default_key(MemoryStore::new());
    persistence.save(&sample_state());
    assert_eq!(persistence.load(), Some(sample_state()));
}

#[test]
fn test_saved_json_shape() {
    let store = MemoryStore::new();
    let persistence = StatePersistence::with_default_key(&store);
    persistence.save(&sample_state());

    let bytes = store.get("tictactoe-state-v1").unwrap().expect("entry written");
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["currentPlayer"], "O");
    assert_eq!(value["gameActive"], true);
    assert_eq!(value["gameState"][4], "X");
    assert_eq!(value["gameState"][0], "");
    assert_eq!(value["scores"]["X"], 3);
    assert_eq!(value["scores"]["O"], 5);
    assert_eq!(value["starter"], "X");
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("nested"));
    let persistence = StatePersistence::new(store, "custom-key");

    assert_eq!(persistence.load(), None);
    persistence.save(&sample_state());
    assert!(dir.path().join("nested").join("custom-key.json").exists());
    assert_eq!(persistence.load(), Some(sample_state()));

    persistence.clear().expect("Clear failed");
    assert_eq!(persistence.load(), None);
    persistence.clear().expect("Clearing twice should succeed");
}

#[test]
fn test_file_store_rejects_path_keys() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path());
    assert!(store.set("../escape", b"{}").is_err());
    assert!(store.get("").is_err());
}

#[test]
fn test_broken_store_never_fails_caller() {
    let persistence = StatePersistence::with_default_key(BrokenStore);
    persistence.save(&sample_state());
    assert_eq!(persistence.load(), None);
    assert!(persistence.clear().is_err());

    // The engine keeps playing on top of a store that rejects everything.
    let mut engine = GameEngine::new(persistence, ManualClock::new(), DEFAULT_ROUND_END_DELAY);
    engine.apply_move(0);
    assert_eq!(engine.current_turn(), Mark::O);
}

#[test]
fn test_malformed_bytes_load_none() {
    let store = MemoryStore::new();
    let persistence = StatePersistence::with_default_key(&store);
    for bytes in [&b"not json"[..], b"null", b"42", b"[\"X\"]", b"\xff\xfe"] {
        store.set(persistence.key(), bytes).unwrap();
        assert_eq!(persistence.load(), None, "bytes: {:?}", bytes);
    }
}

#[test]
fn test_partial_recovery_per_field() {
    let store = MemoryStore::new();
    let persistence = StatePersistence::with_default_key(&store);
    let raw = r#"{
        "currentPlayer": "O",
        "gameActive": false,
        "gameState": ["X", "O", "X", "", "", "", "", "", "", ""],
        "scores": { "X": 4, "O": 1 },
        "starter": null
    }"#;
    store.set(persistence.key(), raw.as_bytes()).unwrap();

    let state = persistence.load().expect("Object should recover");
    assert_eq!(state.current_turn, Mark::O);
    assert!(!state.active);
    assert_eq!(state.board, tictactally::Board::new());
    assert_eq!(state.scores, Scores::new(4, 1));
    assert_eq!(state.starter, Mark::X);
}

#[test]
fn test_fractional_scores_rejected() {
    let store = MemoryStore::new();
    let persistence = StatePersistence::with_default_key(&store);
    store
        .set(persistence.key(), br#"{"scores": {"X": 1.5, "O": 2}}"#)
        .unwrap();
    assert_eq!(persistence.load().map(|s| s.scores), Some(Scores::default()));
}

#[test]
fn test_empty_object_is_default_state() {
    let store = MemoryStore::new();
    let persistence = StatePersistence::with_default_key(&store);
    store.set(persistence.key(), b"{}").unwrap();
    assert_eq!(persistence.load(), Some(PersistedState::default()));
}
