//! Single-slot round-end timer.

use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Deadline after which a concluded round gives way to the next one.
///
/// Holds at most one deadline. Arming replaces it, cancelling clears it,
/// and a deadline fires at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTimer {
    deadline: Option<Instant>,
}

impl RoundTimer {
    /// Creates an unarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to elapse `delay` after `now`.
    #[instrument(skip(self))]
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        if self.deadline.is_some() {
            debug!("Replacing armed round-end timer");
        }
        self.deadline = Some(now + delay);
    }

    /// Clears any armed deadline. Returns true if one was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns the armed deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms and returns true if the deadline has passed at `now`.
    pub fn take_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
