use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::collision::{hits_self, hits_wall};
use crate::config::{GameConfig, GameMode, GridSize, INITIAL_SNAKE_LENGTH};
use crate::error::ConfigError;
use crate::food::spawn_position;
use crate::input::{Direction, GameCommand, direction_change_is_valid};
use crate::snake::{Position, Snake, next_head};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
    /// The snake filled the grid and no cell is left for food.
    Victory,
}

impl GameStatus {
    /// Returns true for the statuses only `reset` leaves.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// What ended a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Immutable snapshot of one game.
///
/// Every operation consumes the snapshot and returns its successor; callers
/// keep a clone when they need the previous value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the board is cleared.
    pub food: Option<Position>,
    /// Heading applied on the last tick.
    pub direction: Direction,
    /// Heading requested for the next tick.
    pub next_direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub mode: GameMode,
    /// Tick interval in milliseconds.
    pub speed_ms: u64,
    pub death_reason: Option<DeathReason>,
    config: GameConfig,
}

impl GameState {
    /// Creates an idle game with the default rules.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> Self {
        Self::with_config(GameConfig::default(), mode, rng)
    }

    /// Validates `config` and creates an idle game from it.
    pub fn try_with_config<R: Rng + ?Sized>(
        config: GameConfig,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_config(config.validate()?, mode, rng))
    }

    /// Creates an idle game: a three-cell snake centred on the grid heading right.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`]; use
    /// [`Self::try_with_config`] for rules from an untrusted source.
    #[must_use]
    pub fn with_config<R: Rng + ?Sized>(config: GameConfig, mode: GameMode, rng: &mut R) -> Self {
        let bounds = config.grid();
        let center = i32::from(config.grid_size / 2);
        let snake = Snake::horizontal(Position::new(center, center), INITIAL_SNAKE_LENGTH);
        let food = spawn_position(rng, bounds, &snake);

        Self {
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            status: GameStatus::Idle,
            mode,
            speed_ms: config.initial_speed_ms,
            death_reason: None,
            config,
        }
    }

    /// Discards this game and creates a fresh idle one with the same rules.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(self, mode: GameMode, rng: &mut R) -> Self {
        Self::with_config(self.config, mode, rng)
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid()
    }

    #[must_use]
    pub fn grid_size(&self) -> u16 {
        self.config.grid_size
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Interval the driver should wait before the next tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Requests a heading for the next tick.
    ///
    /// A request that reverses the committed direction is dropped. Pending
    /// requests are not consulted, so the latest valid one wins.
    #[must_use]
    pub fn change_direction(mut self, requested: Direction) -> Self {
        self.change_direction_in_place(requested);
        self
    }

    pub(crate) fn change_direction_in_place(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.next_direction = requested;
        }
    }

    #[must_use]
    pub fn start(mut self) -> Self {
        if matches!(self.status, GameStatus::Idle | GameStatus::Paused) {
            self.status = GameStatus::Playing;
        }
        self
    }

    #[must_use]
    pub fn pause(mut self) -> Self {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
        self
    }

    #[must_use]
    pub fn resume(mut self) -> Self {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
        self
    }

    /// Start, pause or resume depending on the current status.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self.status {
            GameStatus::Idle => self.start(),
            GameStatus::Playing => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::GameOver | GameStatus::Victory => self,
        }
    }

    /// Applies one external command.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(self, command: GameCommand, rng: &mut R) -> Self {
        match command {
            GameCommand::Direction(direction) => self.change_direction(direction),
            GameCommand::Start => self.start(),
            GameCommand::Pause => self.pause(),
            GameCommand::Resume => self.resume(),
            GameCommand::Toggle => self.toggle(),
            GameCommand::Reset(mode) => self.reset(mode, rng),
        }
    }

    /// Advances the simulation by one cell. Identity unless playing.
    #[must_use]
    pub fn tick<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.tick_in_place(rng);
        self
    }

    /// In-place form of [`Self::tick`] for a driver that owns the snapshot.
    pub(crate) fn tick_in_place<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.status != GameStatus::Playing {
            return;
        }

        let direction = self.next_direction;
        let bounds = self.bounds();
        let head = next_head(self.snake.head(), direction, self.mode, bounds);

        if self.mode == GameMode::Walls && hits_wall(head, bounds) {
            self.end(DeathReason::WallCollision);
            return;
        }

        if hits_self(head, &self.snake) {
            self.end(DeathReason::SelfCollision);
            return;
        }

        let eats = self.food == Some(head);
        self.snake.advance(head, eats);
        self.direction = direction;

        if eats {
            self.score = self.score.saturating_add(self.config.points_per_food);
            self.speed_ms = self.config.next_speed(self.speed_ms);
            self.food = spawn_position(rng, bounds, &self.snake);
            debug!(
                "food eaten at ({}, {}); score {}, speed {}ms",
                head.x, head.y, self.score, self.speed_ms
            );

            if self.food.is_none() {
                info!("board cleared with score {}", self.score);
                self.status = GameStatus::Victory;
            }
        }
    }

    fn end(&mut self, reason: DeathReason) {
        info!("game over ({reason:?}) with score {}", self.score);
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
    }
}
