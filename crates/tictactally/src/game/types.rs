//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (first to move on a fresh scoreboard).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serialized as the literal strings `""`, `"X"` and `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the literal used for this square in persisted state.
    pub fn as_str(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Mark::X) => "X",
            Square::Occupied(Mark::O) => "O",
        }
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// A square literal other than `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid square literal: {:?}", literal)]
pub struct SquareParseError {
    /// The rejected literal.
    pub literal: String,
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(literal: String) -> Result<Self, Self::Error> {
        match literal.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Mark::X)),
            "O" => Ok(Square::Occupied(Mark::O)),
            _ => Err(SquareParseError { literal }),
        }
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.as_str().to_string()
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Cumulative wins per mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    #[serde(rename = "X")]
    x: u32,
    /// Rounds won by O.
    #[serde(rename = "O")]
    o: u32,
}

impl Scores {
    /// Creates a scoreboard with the given totals.
    pub fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Returns the wins recorded for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Records one more win for `mark`.
    pub fn increment(&mut self, mark: Mark) {
        let slot = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
    }

    /// Formats a total the way the scoreboard shows it, e.g. `X: 3`.
    pub fn label(&self, mark: Mark) -> String {
        format!("{}: {}", mark, self.get(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_literals() {
        assert_eq!(Square::try_from(String::new()), Ok(Square::Empty));
        assert_eq!(Square::try_from("O".to_string()), Ok(Square::Occupied(Mark::O)));
        assert!(Square::try_from("x".to_string()).is_err());
        assert_eq!(String::from(Square::Occupied(Mark::X)), "X");
    }

    #[test]
    fn test_board_serializes_as_flat_array() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["","","","","X","","","",""]"#);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_scores_label_and_increment() {
        let mut scores = Scores::default();
        scores.increment(Mark::O);
        scores.increment(Mark::O);
        assert_eq!(scores.label(Mark::X), "X: 0");
        assert_eq!(scores.label(Mark::O), "O: 2");
    }
}
