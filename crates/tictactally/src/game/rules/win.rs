//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.mark()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Returns the first line completed by `mark`, if any.
#[instrument(skip(board))]
pub fn winning_line_for(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line_owner(board, *line) == Some(mark))
}

/// Returns every position lying on any complete line, in board order.
///
/// A move that completes two lines at once highlights both.
#[instrument(skip(board))]
pub fn winning_cells(board: &Board) -> Vec<Position> {
    let mut cells: Vec<Position> = LINES
        .into_iter()
        .filter(|line| line_owner(board, *line).is_some())
        .flatten()
        .collect();
    cells.sort();
    cells.dedup();
    cells
}
