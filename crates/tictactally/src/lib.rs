//! Tictactally - two-player tic-tac-toe with a running scoreboard
//!
//! The library holds the game engine and its persistence. Front ends feed
//! cell and reset events into a [`GameEngine`] and draw the [`GameView`] it
//! hands back; they never touch game state directly.
//!
//! # Architecture
//!
//! - **Engine**: board, turn, scores and starter rotation across rounds
//! - **Timer**: a single cancellable round-end deadline, driven by a [`Clock`]
//! - **Persistence**: one JSON snapshot under one key of a [`KeyValueStore`]
//!
//! # Example
//!
//! ```
//! use tictactally::{GameEngine, MemoryStore, MoveOutcome, StatePersistence, SystemClock};
//! use std::time::Duration;
//!
//! let persistence = StatePersistence::with_default_key(MemoryStore::new());
//! let mut engine = GameEngine::new(persistence, SystemClock, Duration::from_millis(1500));
//!
//! assert_eq!(engine.apply_move(4), MoveOutcome::Continue(tictactally::Mark::O));
//! assert_eq!(engine.view().status_text(), "Player O's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod persistence;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use game::rules;
pub use game::{
    Board, Clock, DEFAULT_ROUND_END_DELAY, GameEngine, GameView, ManualClock, Mark, MoveOutcome,
    Position, RoundTimer, Scores, Square, SquareParseError, StatusMessage, SystemClock,
};

// Crate-level exports - Persistence
pub use persistence::{
    DEFAULT_STORAGE_KEY, FileStore, KeyValueStore, MemoryStore, PersistedState, StatePersistence,
    StoreError,
};
