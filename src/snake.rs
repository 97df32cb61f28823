use std::collections::VecDeque;

use crate::grid::{GridGeometry, Position};
use crate::input::{Direction, direction_change_is_valid};

/// Snake body plus the heading history that pairs with it.
///
/// `headings[i]` is the heading recorded when `body[i]` was entered, so the
/// front is the head heading and the back is the tail heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    headings: VecDeque<Direction>,
}

impl Snake {
    /// Spawns a snake at the grid origin heading up, grown once to length 2.
    #[must_use]
    pub fn spawn(geometry: &GridGeometry) -> Self {
        let mut snake = Self::new(Position::ORIGIN, Direction::Up);
        snake.grow(geometry);
        snake
    }

    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            headings: VecDeque::from([direction]),
        }
    }

    /// Creates a snake from explicit body segments (front is head), every
    /// joint heading `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty; a snake always has a head.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        let headings = segments.iter().map(|_| direction).collect();
        Self {
            body: VecDeque::from(segments),
            headings,
        }
    }

    /// Turns the head unless `requested` reverses the current head heading.
    ///
    /// Returns true when the heading changed. `None` means no change.
    pub fn set_direction(&mut self, requested: Option<Direction>) -> bool {
        let Some(requested) = requested else {
            return false;
        };

        let current = self.head_direction();
        if requested == current || !direction_change_is_valid(current, requested) {
            return false;
        }

        if let Some(heading) = self.headings.front_mut() {
            *heading = requested;
        }
        true
    }

    /// Advances the head one cell along its heading; every other segment
    /// takes its predecessor's previous cell. Length is unchanged.
    ///
    /// The new head is not wrapped; see [`Snake::wrap_head`].
    pub fn move_forward(&mut self) {
        let heading = self.head_direction();
        let next_head = self.head().stepped(heading);

        self.body.push_front(next_head);
        let _ = self.body.pop_back();

        self.headings.push_front(heading);
        let _ = self.headings.pop_back();
    }

    /// Wraps the head cell into the grid bounds.
    pub fn wrap_head(&mut self, geometry: &GridGeometry) {
        if let Some(head) = self.body.front_mut() {
            *head = geometry.wrap(*head);
        }
    }

    /// Appends one segment behind the tail, away from the tail heading.
    /// Existing segments stay where they are.
    pub fn grow(&mut self, geometry: &GridGeometry) {
        let tail_heading = self.tail_direction();
        let new_tail = geometry.wrap(self.tail().stepped(tail_heading.opposite()));

        self.body.push_back(new_tail);
        self.headings.push_back(tail_heading);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    #[must_use]
    pub fn head_direction(&self) -> Direction {
        self.headings[0]
    }

    #[must_use]
    pub fn tail_direction(&self) -> Direction {
        self.headings[self.headings.len() - 1]
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn self_intersects(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
