//! Steering strategies for unattended play.

use crate::collision::{hits_self, hits_wall};
use crate::config::GameMode;
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::next_head;

/// A strategy that picks the heading for the next tick.
pub trait Autopilot {
    fn next_direction(&self, state: &GameState) -> Direction;
}

/// One-step greedy chaser.
///
/// Tries non-reversing headings in order of Manhattan distance from the
/// resulting head to the food and takes the first one that does not collide.
/// It never looks further ahead, so it can steer itself into dead ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAutopilot;

impl Autopilot for GreedyAutopilot {
    fn next_direction(&self, state: &GameState) -> Direction {
        let Some(food) = state.food else {
            return state.direction;
        };

        let head = state.head();
        let bounds = state.bounds();

        let mut candidates: Vec<(Direction, u32)> = Direction::ALL
            .into_iter()
            .filter(|direction| !state.direction.is_opposite(*direction))
            .map(|direction| {
                let next = next_head(head, direction, state.mode, bounds);
                (direction, next.manhattan_distance(food))
            })
            .collect();
        // Stable: equal distances keep the `Direction::ALL` order.
        candidates.sort_by_key(|&(_, distance)| distance);

        candidates
            .into_iter()
            .map(|(direction, _)| direction)
            .find(|&direction| {
                let next = next_head(head, direction, state.mode, bounds);
                let wall = state.mode == GameMode::Walls && hits_wall(next, bounds);
                !wall && !hits_self(next, &state.snake)
            })
            .unwrap_or(state.direction)
    }
}

/// Heading chosen by [`GreedyAutopilot`] for `state`.
#[must_use]
pub fn next_autopilot_direction(state: &GameState) -> Direction {
    GreedyAutopilot.next_direction(state)
}
