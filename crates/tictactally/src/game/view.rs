//! Render-ready view of the engine state.

use derive_more::Display;
use serde::Serialize;

use super::position::Position;
use super::types::{Board, Mark, Scores, Square};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum StatusMessage {
    /// Round in progress.
    #[display("Player {}'s turn", _0)]
    Turn(Mark),
    /// Round won.
    #[display("Player {} wins!", _0)]
    Win(Mark),
    /// Board filled without a line.
    #[display("It's a draw!")]
    Draw,
}

/// Snapshot of everything a front end needs to draw the game.
///
/// Produced by [`GameEngine::view`](crate::GameEngine::view). Holds no
/// reference back into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board contents.
    pub board: Board,
    /// Status line.
    pub status: StatusMessage,
    /// Mark the status line is themed for.
    pub status_mark: Mark,
    /// Score totals.
    pub scores: Scores,
    /// Cells lying on any completed line, in board order.
    pub winning_cells: Vec<Position>,
    /// True while a drawn round is still on screen.
    pub draw_highlight: bool,
}

impl GameView {
    /// Square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Whether `pos` should be highlighted as part of a winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_cells.contains(&pos)
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_is_verbatim() {
        assert_eq!(StatusMessage::Turn(Mark::X).to_string(), "Player X's turn");
        assert_eq!(StatusMessage::Win(Mark::O).to_string(), "Player O wins!");
        assert_eq!(StatusMessage::Draw.to_string(), "It's a draw!");
    }
}
