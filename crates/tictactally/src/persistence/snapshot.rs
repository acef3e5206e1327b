//! Persisted game snapshot and its field-level recovery.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{instrument, warn};

use crate::game::{Board, Mark, Scores};

/// Everything needed to rebuild a [`GameEngine`](crate::GameEngine).
///
/// Serialized as a JSON object with the fields `currentPlayer`, `gameActive`,
/// `gameState`, `scores` and `starter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Mark to move.
    #[serde(rename = "currentPlayer")]
    pub current_turn: Mark,
    /// False once the round has been decided.
    #[serde(rename = "gameActive")]
    pub active: bool,
    /// Board squares in row-major order.
    #[serde(rename = "gameState")]
    pub board: Board,
    /// Cumulative wins.
    pub scores: Scores,
    /// Mark that opens the next round.
    pub starter: Mark,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            current_turn: Mark::X,
            active: true,
            board: Board::new(),
            scores: Scores::default(),
            starter: Mark::X,
        }
    }
}

impl PersistedState {
    /// Rebuilds a snapshot from parsed JSON, field by field.
    ///
    /// Returns `None` unless `value` is an object. Each field that is missing
    /// or fails validation keeps its default; the rest are accepted.
    #[instrument(skip(value))]
    pub fn recover(value: &Value) -> Option<Self> {
        let Some(object) = value.as_object() else {
            warn!("Persisted state is not an object");
            return None;
        };

        let mut state = Self::default();
        if let Some(board) = field(object, "gameState") {
            state.board = board;
        }
        if let Some(scores) = field(object, "scores") {
            state.scores = scores;
        }
        if let Some(current_turn) = field(object, "currentPlayer") {
            state.current_turn = current_turn;
        }
        if let Some(active) = field(object, "gameActive") {
            state.active = active;
        }
        if let Some(starter) = field(object, "starter") {
            state.starter = starter;
        }
        Some(state)
    }
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, name: &'static str) -> Option<T> {
    let value = object.get(name)?;
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(field = name, error = %e, "Rejected persisted field, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Square};
    use serde_json::json;

    #[test]
    fn test_field_names() {
        let value = serde_json::to_value(PersistedState::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "currentPlayer": "X",
                "gameActive": true,
                "gameState": ["", "", "", "", "", "", "", "", ""],
                "scores": { "X": 0, "O": 0 },
                "starter": "X",
            })
        );
    }

    #[test]
    fn test_recover_keeps_valid_fields() {
        let value = json!({
            "currentPlayer": "O",
            "gameActive": "yes",
            "gameState": ["X", "", "", "", "", "", "", "", ""],
            "scores": { "X": 2, "O": -1 },
            "starter": "Z",
        });
        let state = PersistedState::recover(&value).unwrap();
        assert_eq!(state.current_turn, Mark::O);
        assert!(state.active);
        assert_eq!(state.board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(state.scores, Scores::default());
        assert_eq!(state.starter, Mark::X);
    }

    #[test]
    fn test_recover_rejects_short_board() {
        let value = json!({ "gameState": ["X", "O"] });
        let state = PersistedState::recover(&value).unwrap();
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_recover_rejects_unknown_square() {
        let value = json!({ "gameState": ["X", "", "", "", "?", "", "", "", ""] });
        let state = PersistedState::recover(&value).unwrap();
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_recover_non_object() {
        assert_eq!(PersistedState::recover(&Value::Null), None);
        assert_eq!(PersistedState::recover(&json!([1, 2, 3])), None);
    }
}
