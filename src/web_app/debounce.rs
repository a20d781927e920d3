// web_app/debounce.rs - Quiet-period gate for the search input
//
// The search bar pushes every keystroke here and arms a timer with the
// returned ticket. When a timer fires it settles its ticket; only the
// ticket of the most recent push yields a value, so a burst of typing
// produces a single fetch for the final text.

use std::time::Duration;

/// How long the search input has to be quiet before a fetch is triggered
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debouncer<T = String> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Debouncer {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new value and return the ticket its timer must present.
    /// Any earlier ticket is invalidated.
    pub fn push(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Called when the timer for `ticket` fires.
    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value; outstanding timers settle to nothing.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
