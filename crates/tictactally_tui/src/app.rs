//! Application state and event dispatch.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tictactally::{GameEngine, GameView, KeyValueStore, MoveOutcome, Position};
use tracing::{debug, info, instrument};

use crate::input::{Action, key_action, move_cursor};

/// Longest the event loop waits for input before re-checking the timer.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App<S: KeyValueStore> {
    engine: GameEngine<S>,
    cursor: Position,
    cell_areas: [Rect; 9],
}

impl<S: KeyValueStore> App<S> {
    /// Creates a new application around `engine`.
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
        }
    }

    /// Render-ready game state.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Remembers where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let Some(action) = key_action(key) else {
            return Control::Continue;
        };
        debug!(?action, "Key action");
        match action {
            Action::Quit => return Control::Quit,
            Action::Reset => self.engine.reset_scores(),
            Action::Cell(index) => self.click_cell(index),
            Action::PlayCursor => self.click_cell(self.cursor.to_index()),
            Action::MoveCursor(arrow) => self.cursor = move_cursor(self.cursor, arrow),
        }
        Control::Continue
    }

    /// Handles a mouse event; a left click on a cell plays it.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self
            .cell_areas
            .iter()
            .position(|area| contains(*area, event.column, event.row));
        if let Some(index) = hit {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.click_cell(index);
        }
    }

    /// Lets the round-end timer advance the game.
    pub fn tick(&mut self) -> bool {
        self.engine.poll_timer()
    }

    /// How long to wait for input before the next tick.
    pub fn poll_timeout(&self) -> Duration {
        match self.engine.pending_advance() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(MAX_POLL),
            None => MAX_POLL,
        }
    }

    fn click_cell(&mut self, index: usize) {
        match self.engine.apply_move(index) {
            MoveOutcome::NoChange => debug!(index, "Click ignored"),
            MoveOutcome::Continue(next) => debug!(index, %next, "Move played"),
            MoveOutcome::Win { mark, .. } => info!(%mark, "Round won"),
            MoveOutcome::Draw => info!("Round drawn"),
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
