use std::collections::VecDeque;

use crate::input::{Direction, direction_change_is_valid};

/// Most turns held at once; later intents are dropped until a tick frees a slot.
pub const MAX_PENDING_TURNS: usize = 3;

/// Direction intents gathered between ticks, applied one per tick.
///
/// Each new intent is judged against the last queued turn rather than the
/// heading the snake is currently drawn with, so quick key sequences become a
/// valid series of turns.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading in effect once every queued turn has been applied.
    #[must_use]
    pub fn effective_direction(&self, head_direction: Direction) -> Direction {
        self.pending.back().copied().unwrap_or(head_direction)
    }

    /// Queues `intent` when it neither repeats nor reverses the effective
    /// direction and the queue has room. Returns true when the intent was
    /// queued.
    pub fn push(&mut self, intent: Option<Direction>, head_direction: Direction) -> bool {
        let Some(direction) = intent else {
            return false;
        };
        if self.pending.len() >= MAX_PENDING_TURNS {
            return false;
        }

        let last = self.effective_direction(head_direction);
        if direction == last || !direction_change_is_valid(last, direction) {
            return false;
        }

        self.pending.push_back(direction);
        true
    }

    /// Releases the oldest queued turn, if any.
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
