//! Time-based debounce filter for the pushbutton line.
//!
//! Provides [`Debouncer`], which accepts a new button level only after the raw
//! samples have held that level for longer than a stability window measured in
//! wall-clock time. Loop period does not matter, so long blocking work between
//! polls (such as the completion animation) cannot shorten or stretch the window.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::{ButtonLevel, EdgeEvent};

/// Debounce state for a single active-low button.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct Debouncer<I: TimeInstant> {
    last_raw_level: ButtonLevel,
    accepted_level: ButtonLevel,
    last_change: I,
    window: I::Duration,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a filter that starts released, with the window anchored at `now`.
    pub fn new(window: I::Duration, now: I) -> Self {
        Self {
            last_raw_level: ButtonLevel::High,
            accepted_level: ButtonLevel::High,
            last_change: now,
            window,
        }
    }

    /// Creates a filter with a window given in milliseconds.
    pub fn with_window_ms(window_ms: u64, now: I) -> Self {
        Self::new(I::Duration::from_millis(window_ms), now)
    }

    /// Feeds one raw sample.
    ///
    /// A change of raw level restarts the window and never yields an edge. A level
    /// that has held for longer than the window and differs from the accepted level
    /// is accepted and reported as at most one edge.
    pub fn poll(&mut self, raw_level: ButtonLevel, now: I) -> Option<EdgeEvent> {
        if raw_level != self.last_raw_level {
            self.last_change = now;
            self.last_raw_level = raw_level;
            return None;
        }

        if now.elapsed_exceeds(self.last_change, self.window) && raw_level != self.accepted_level {
            self.accepted_level = raw_level;
            return Some(if raw_level.is_pressed() {
                EdgeEvent::Falling
            } else {
                EdgeEvent::Rising
            });
        }

        None
    }

    /// Returns the debounced level.
    pub fn accepted_level(&self) -> ButtonLevel {
        self.accepted_level
    }

    /// Returns the most recent raw sample.
    pub fn last_raw_level(&self) -> ButtonLevel {
        self.last_raw_level
    }

    /// Returns the stability window.
    pub fn window(&self) -> I::Duration {
        self.window
    }
}
