use log::debug;
use rand::Rng;

use crate::config::{FOOD_PLACEMENT_ATTEMPTS, GridSize};
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell that the snake does not occupy.
///
/// Draws random coordinates until one is free. After
/// [`FOOD_PLACEMENT_ATTEMPTS`] misses the free cells are enumerated and one
/// is chosen directly. Returns `None` when the snake covers the whole grid.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let position = random_cell(rng, bounds);
        if !snake.occupies(position) {
            return Some(position);
        }
    }

    debug!(
        "food placement fell back to free-cell scan ({} of {} cells occupied)",
        snake.len(),
        bounds.total_cells()
    );
    spawn_from_free_cells(rng, bounds, snake)
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

fn spawn_from_free_cells<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{spawn_from_free_cells, spawn_position};
    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = spawn_position(&mut rng, bounds, &snake).expect("board has free cells");
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(bounds));
        }
    }

    #[test]
    fn last_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize::square(4);
        let segments: Vec<_> = (0..16)
            .map(|i| Position::new(i % 4, i / 4))
            .filter(|p| *p != Position::new(2, 3))
            .collect();
        let snake = Snake::from_segments(segments);

        assert_eq!(
            spawn_position(&mut rng, bounds, &snake),
            Some(Position::new(2, 3))
        );
    }

    #[test]
    fn full_board_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize::square(4);
        let snake = Snake::from_segments((0..16).map(|i| Position::new(i % 4, i / 4)).collect());

        assert_eq!(spawn_position(&mut rng, bounds, &snake), None);
        assert_eq!(spawn_from_free_cells(&mut rng, bounds, &snake), None);
    }

    #[test]
    fn same_seed_places_food_identically() {
        let snake = Snake::horizontal(Position::new(10, 10), 3);
        let bounds = GridSize::square(20);

        let first = spawn_position(&mut StdRng::seed_from_u64(99), bounds, &snake);
        let second = spawn_position(&mut StdRng::seed_from_u64(99), bounds, &snake);

        assert_eq!(first, second);
    }
}
