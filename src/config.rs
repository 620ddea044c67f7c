use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid with `side` cells per axis.
    #[must_use]
    pub const fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// World topology, fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Leaving the grid ends the game.
    #[default]
    Walls,
    /// The grid wraps toroidally on both axes.
    PassThrough,
}

impl GameMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Walls => "walls",
            Self::PassThrough => "pass-through",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "walls" => Ok(Self::Walls),
            "pass-through" | "passthrough" | "wrap" => Ok(Self::PassThrough),
            other => Err(format!(
                "unknown game mode `{other}` (expected `walls` or `pass-through`)"
            )),
        }
    }
}

/// Side length of the default square playing field.
pub const GRID_SIZE: u16 = 20;

/// Tick interval in milliseconds at the start of a game.
pub const INITIAL_SPEED_MS: u64 = 150;

/// Milliseconds removed from the tick interval per food eaten.
pub const SPEED_INCREMENT_MS: u64 = 5;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_SPEED_MS: u64 = 50;

/// Score granted per food item.
pub const POINTS_PER_FOOD: u32 = 10;

/// Number of segments in a freshly created snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Random draws attempted before food placement enumerates free cells.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 256;

/// Smallest side length that fits the starting snake and still leaves a free cell.
pub const MIN_GRID_SIZE: u16 = 4;

/// Tunable rules carried by every game snapshot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u16,
    pub initial_speed_ms: u64,
    pub speed_increment_ms: u64,
    pub min_speed_ms: u64,
    pub points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_increment_ms: SPEED_INCREMENT_MS,
            min_speed_ms: MIN_SPEED_MS,
            points_per_food: POINTS_PER_FOOD,
        }
    }
}

impl GameConfig {
    /// Returns the square grid described by this config.
    #[must_use]
    pub fn grid(self) -> GridSize {
        GridSize::square(self.grid_size)
    }

    /// Returns the tick interval after one more food has been eaten.
    #[must_use]
    pub fn next_speed(self, current_ms: u64) -> u64 {
        current_ms
            .saturating_sub(self.speed_increment_ms)
            .max(self.min_speed_ms)
    }

    /// Checks the rules for values the simulation cannot run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be at least {MIN_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::Invalid(
                "min_speed_ms must be greater than zero".to_owned(),
            ));
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "min_speed_ms ({}) exceeds initial_speed_ms ({})",
                self.min_speed_ms, self.initial_speed_ms
            )));
        }
        Ok(self)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(raw)?.validate()
    }

    /// Loads a config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameConfig, GameMode, GridSize, MIN_SPEED_MS};
    use crate::error::ConfigError;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default().validate().expect("defaults are valid");
        assert_eq!(config.grid(), GridSize::square(20));
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = GameConfig::from_json(r#"{ "grid_size": 12 }"#).expect("valid config");

        assert_eq!(config.grid_size, 12);
        assert_eq!(config.min_speed_ms, MIN_SPEED_MS);
    }

    #[test]
    fn rejects_grid_too_small_for_starting_snake() {
        let result = GameConfig::from_json(r#"{ "grid_size": 3 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_floor_above_initial_speed() {
        let result = GameConfig::from_json(r#"{ "initial_speed_ms": 40, "min_speed_ms": 50 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json("not-json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn speed_decrease_saturates_at_floor() {
        let config = GameConfig::default();

        assert_eq!(config.next_speed(150), 145);
        assert_eq!(config.next_speed(53), 50);
        assert_eq!(config.next_speed(50), 50);
    }

    #[test]
    fn mode_parses_from_cli_names() {
        assert_eq!("walls".parse::<GameMode>(), Ok(GameMode::Walls));
        assert_eq!("pass-through".parse::<GameMode>(), Ok(GameMode::PassThrough));
        assert!("lava".parse::<GameMode>().is_err());
        assert_eq!(GameMode::PassThrough.to_string(), "pass-through");
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let path = std::env::temp_dir().join("grid-snake-config-tests-absent.json");
        let _ = std::fs::remove_file(&path);

        let config = GameConfig::load(&path).expect("missing file should fall back");
        assert_eq!(config, GameConfig::default());
    }
}
