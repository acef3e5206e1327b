//! Tic-tac-toe rules and the multi-round engine.

mod clock;
mod engine;
mod position;
pub mod rules;
mod timer;
mod types;
mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{DEFAULT_ROUND_END_DELAY, GameEngine, MoveOutcome};
pub use position::Position;
pub use timer::RoundTimer;
pub use types::{Board, Mark, Scores, Square, SquareParseError};
pub use view::{GameView, StatusMessage};
