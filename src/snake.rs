use std::collections::VecDeque;

use crate::config::{GameMode, GridSize};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell one unit step away, without wrapping.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance between two cells, ignoring wrap-around.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Computes the candidate head after one step in `direction`.
///
/// Pass-through mode wraps the result onto the opposite edge. Walls mode
/// leaves it as is, so it may lie outside the grid.
#[must_use]
pub fn next_head(head: Position, direction: Direction, mode: GameMode, bounds: GridSize) -> Position {
    let stepped = head.stepped(direction);
    match mode {
        GameMode::Walls => stepped,
        GameMode::PassThrough => stepped.wrapped(bounds),
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a horizontal snake of `length` cells with its head at `head`,
    /// trailing off to the left.
    #[must_use]
    pub fn horizontal(head: Position, length: usize) -> Self {
        let body = (0..length)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the head onto `new_head`, keeping the tail when `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
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

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }
}
