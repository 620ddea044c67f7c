//! Collision predicates consulted by `tick` and the autopilot.

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Returns true when `position` lies outside the grid.
///
/// Only meaningful in walls mode; pass-through heads are always wrapped.
#[must_use]
pub fn hits_wall(position: Position, bounds: GridSize) -> bool {
    !position.is_within_bounds(bounds)
}

/// Returns true when `head` lands on any segment except the current tail.
///
/// The tail is skipped unconditionally, including on a tick where the snake
/// grows. Food never sits on the snake, so the tail cell cannot also be the
/// food cell.
#[must_use]
pub fn hits_self(head: Position, snake: &Snake) -> bool {
    let mut body = snake.segments();
    let _ = body.next_back();
    body.any(|segment| *segment == head)
}
