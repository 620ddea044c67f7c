use crate::config::GameMode;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All headings in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `other` is the exact reverse of `self`.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// Unit step `(dx, dy)` on the grid; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Discrete commands delivered to a game by its driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameCommand {
    Direction(Direction),
    Start,
    Pause,
    Resume,
    /// Single-key control: start when idle, pause when playing, resume when paused.
    Toggle,
    Reset(GameMode),
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    !current.is_opposite(next)
}

#[cfg(test)]
mod tests {
    use super::{Direction, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_relation_is_symmetric_and_involutive() {
        for a in Direction::ALL {
            assert_eq!(a.opposite().opposite(), a);
            for b in Direction::ALL {
                assert_eq!(a.is_opposite(b), b.is_opposite(a));
            }
        }
    }

    #[test]
    fn perpendicular_directions_are_never_opposite() {
        for vertical in [Direction::Up, Direction::Down] {
            for horizontal in [Direction::Left, Direction::Right] {
                assert!(!vertical.is_opposite(horizontal));
                assert!(!horizontal.is_opposite(vertical));
            }
        }
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }
}
