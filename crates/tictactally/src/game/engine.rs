//! Round-based game engine with scores and persisted state.

use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::clock::Clock;
use super::position::Position;
use super::rules;
use super::timer::RoundTimer;
use super::types::{Board, Mark, Scores, Square};
use super::view::{GameView, StatusMessage};
use crate::persistence::{KeyValueStore, PersistedState, StatePersistence};

/// Delay between the end of a round and the start of the next one.
pub const DEFAULT_ROUND_END_DELAY: Duration = Duration::from_millis(1500);

/// What a call to [`GameEngine::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Round already decided, cell occupied, or index out of range.
    NoChange,
    /// Mark placed; the given mark moves next.
    Continue(Mark),
    /// Mark placed and completed `line`.
    Win {
        /// Winning mark.
        mark: Mark,
        /// First completed line in rows, columns, diagonals order.
        line: [Position; 3],
    },
    /// Mark placed and filled the board without a line.
    Draw,
}

/// Tic-tac-toe engine spanning many rounds.
///
/// Owns the board, turn, scores and starter rotation. Every state change is
/// written through the [`StatePersistence`] wholesale. A decided round is
/// cleared by [`poll_timer`](Self::poll_timer) once the round-end delay has
/// passed, or immediately by [`reset_scores`](Self::reset_scores).
#[derive(Debug)]
pub struct GameEngine<S: KeyValueStore> {
    board: Board,
    current_turn: Mark,
    active: bool,
    scores: Scores,
    starter: Mark,
    timer: RoundTimer,
    round_end_delay: Duration,
    clock: Box<dyn Clock>,
    persistence: StatePersistence<S>,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Creates an engine, restoring the saved snapshot if one loads.
    #[instrument(skip_all, fields(round_end_delay = ?round_end_delay))]
    pub fn new(
        persistence: StatePersistence<S>,
        clock: impl Clock + 'static,
        round_end_delay: Duration,
    ) -> Self {
        let mut engine = Self {
            board: Board::new(),
            current_turn: Mark::X,
            active: true,
            scores: Scores::default(),
            starter: Mark::X,
            timer: RoundTimer::new(),
            round_end_delay,
            clock: Box::new(clock),
            persistence,
        };
        match engine.persistence.load() {
            Some(state) => engine.restore(state),
            None => info!("Starting with a fresh scoreboard"),
        }
        engine
    }

    /// Places the current mark at `cell_index` (0-8).
    ///
    /// Returns [`MoveOutcome::NoChange`] without touching state or storage
    /// when the round is decided, the index is out of range, or the cell is
    /// taken.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveOutcome {
        if !self.active {
            debug!("Round already decided, ignoring move");
            return MoveOutcome::NoChange;
        }
        let Some(pos) = Position::from_index(cell_index) else {
            debug!("Cell index out of range, ignoring move");
            return MoveOutcome::NoChange;
        };
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Cell occupied, ignoring move");
            return MoveOutcome::NoChange;
        }

        let mover = self.current_turn;
        self.board.set(pos, Square::Occupied(mover));

        let outcome = if let Some(line) = rules::winning_line_for(&self.board, mover) {
            self.active = false;
            self.scores.increment(mover);
            self.starter = mover.opponent();
            self.arm_round_end();
            info!(
                winner = %mover,
                ?line,
                x = self.scores.get(Mark::X),
                o = self.scores.get(Mark::O),
                "Round won"
            );
            MoveOutcome::Win { mark: mover, line }
        } else if rules::is_draw(&self.board) {
            self.active = false;
            self.starter = self.starter.opponent();
            self.arm_round_end();
            info!(next_starter = %self.starter, "Round drawn");
            MoveOutcome::Draw
        } else {
            self.current_turn = mover.opponent();
            debug!(position = %pos, next = %self.current_turn, "Move applied");
            MoveOutcome::Continue(self.current_turn)
        };

        self.save();
        outcome
    }

    /// Clears the board and opens a round for the current starter.
    #[instrument(skip(self), fields(starter = %self.starter))]
    pub fn start_next_round(&mut self) {
        if self.timer.cancel() {
            debug!("Cancelled pending round-end timer");
        }
        self.board = Board::new();
        self.current_turn = self.starter;
        self.active = true;
        info!("New round started");
        self.save();
    }

    /// Zeroes both scores, hands the next round to X and starts it.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        if self.timer.cancel() {
            debug!("Cancelled pending round-end timer");
        }
        self.scores = Scores::default();
        self.starter = Mark::X;
        info!("Scores reset");
        self.start_next_round();
    }

    /// Runs the round transition if the round-end timer has elapsed.
    ///
    /// Returns true when a new round was started.
    #[instrument(skip(self))]
    pub fn poll_timer(&mut self) -> bool {
        let now = self.clock.now();
        if self.timer.take_if_due(now) {
            debug!("Round-end timer elapsed");
            self.start_next_round();
            true
        } else {
            false
        }
    }

    /// Deadline of the armed round-end timer, if any.
    pub fn pending_advance(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Recomputes the winner from the board.
    pub fn current_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// Captures the full durable state.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            current_turn: self.current_turn,
            active: self.active,
            board: self.board.clone(),
            scores: self.scores,
            starter: self.starter,
        }
    }

    /// Replaces the engine state with `state` without writing it back.
    ///
    /// A decided round re-arms the round-end timer. A snapshot claiming an
    /// open round on a board that is already won or full is restored as
    /// decided.
    #[instrument(skip(self, state), fields(active = state.active))]
    pub fn restore(&mut self, state: PersistedState) {
        self.timer.cancel();
        self.board = state.board;
        self.current_turn = state.current_turn;
        self.active = state.active;
        self.scores = state.scores;
        self.starter = state.starter;

        if self.active && (self.current_winner().is_some() || rules::is_full(&self.board)) {
            warn!("Restored open round is already decided, closing it");
            self.active = false;
        }
        if !self.active {
            self.arm_round_end();
        }
        debug!(turn = %self.current_turn, starter = %self.starter, "State restored");
    }

    /// Builds the render-ready view of the current state.
    pub fn view(&self) -> GameView {
        let winner = self.current_winner();
        let (status, status_mark) = match (self.active, winner) {
            (true, _) => (StatusMessage::Turn(self.current_turn), self.current_turn),
            (false, Some(mark)) => (StatusMessage::Win(mark), mark),
            (false, None) => (StatusMessage::Draw, self.current_turn),
        };
        let winning_cells = if self.active {
            Vec::new()
        } else {
            rules::winning_cells(&self.board)
        };
        GameView {
            board: self.board.clone(),
            status,
            status_mark,
            scores: self.scores,
            winning_cells,
            draw_highlight: !self.active && winner.is_none(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// False while a decided round waits for the next one.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Score totals.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Mark that opens the next round.
    pub fn starter(&self) -> Mark {
        self.starter
    }

    /// The persistence adapter.
    pub fn persistence(&self) -> &StatePersistence<S> {
        &self.persistence
    }

    fn arm_round_end(&mut self) {
        let now = self.clock.now();
        self.timer.arm(now, self.round_end_delay);
    }

    fn save(&self) {
        self.persistence.save(&self.snapshot());
    }
}
