use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_SNAKE_LEN};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Row grows downward, column grows rightward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i32::from(bounds.height)
            && self.col < i32::from(bounds.width)
    }

    /// Returns the neighboring position one cell in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                row: self.row - 1,
                col: self.col,
            },
            Direction::Down => Self {
                row: self.row + 1,
                col: self.col,
            },
            Direction::Left => Self {
                row: self.row,
                col: self.col - 1,
            },
            Direction::Right => Self {
                row: self.row,
                col: self.col + 1,
            },
        }
    }
}

/// Snake body segments plus direction bookkeeping.
///
/// The body is ordered head first. `direction` is what the current tick
/// moves along; `pending_direction` holds the most recent valid request
/// and is adopted only after a step has been taken, so a key press never
/// affects the tick it arrives in.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates the seed snake: `INITIAL_SNAKE_LEN` contiguous horizontal
    /// cells with the head at `head`, trailing away from `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LEN);
        let mut cell = head;
        for _ in 0..INITIAL_SNAKE_LEN {
            body.push_back(cell);
            cell = cell.offset(direction.opposite());
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Buffers `requested` as the next direction.
    ///
    /// A request for the exact reverse of the current direction is
    /// silently dropped, so the snake can never fold back onto its own
    /// neck within a single tick.
    pub fn buffer_direction(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.pending_direction = requested;
    }

    /// Promotes the pending direction to the active one.
    ///
    /// Callers run this after a movement step, never before; the gap is
    /// what gives direction changes their one-tick latency.
    pub fn adopt_pending(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Returns the cell the head moves into on the next step.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().offset(self.direction)
    }

    /// Commits one movement step.
    ///
    /// The new head is pushed; unless the snake is growing this step,
    /// the tail cell is dropped so the length stays constant.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true when `new_head` lands on a body cell that can
    /// actually be collided with.
    ///
    /// The first `INITIAL_SNAKE_LEN` cells of the pre-step body are
    /// skipped: the head cannot re-enter its own cell or the segments
    /// directly behind it in one step, and counting them would flag
    /// false collisions from the head's own trailing segments.
    #[must_use]
    pub fn collides_with_body(&self, new_head: Position) -> bool {
        self.body
            .iter()
            .skip(INITIAL_SNAKE_LEN)
            .any(|segment| *segment == new_head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction applied to the current tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next tick will adopt.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
