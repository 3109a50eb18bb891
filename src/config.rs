use std::{env, path::PathBuf};

use crossterm::style::Color;
use log::LevelFilter;

use crate::board::Board;
use crate::error::{GameError, Result};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const GRID_SIZE: i32 = 20;
pub const SPEED: u32 = 20;

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

const LOG_FILE: &str = "snake.log";
const LOG_LEVEL_VAR: &str = "SNAKE_LOG";

/// Colors used to paint the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub apple: Color,
    pub snake: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: BOARD_BACKGROUND_COLOR,
            border: BORDER_COLOR,
            apple: APPLE_COLOR,
            snake: SNAKE_COLOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub grid_size: i32,
    pub ticks_per_second: u32,
    pub palette: Palette,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            grid_size: GRID_SIZE,
            ticks_per_second: SPEED,
            palette: Palette::default(),
            log_file: PathBuf::from(LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Defaults, with the log level optionally taken from `SNAKE_LOG`.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(level) = env::var(LOG_LEVEL_VAR).ok().and_then(|v| parse_level(&v)) {
            config.log_level = level;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0 {
            return Err(invalid(format!("grid size must be positive, got {}", self.grid_size)));
        }

        if self.screen_width % self.grid_size != 0 || self.screen_height % self.grid_size != 0 {
            return Err(invalid(format!(
                "screen {}x{} is not a multiple of the grid size {}",
                self.screen_width, self.screen_height, self.grid_size
            )));
        }

        let (columns, rows) = (self.screen_width / self.grid_size, self.screen_height / self.grid_size);
        if columns < 3 || rows < 3 {
            return Err(invalid(format!("grid of {}x{} cells has no interior", columns, rows)));
        }

        if self.ticks_per_second == 0 {
            return Err(invalid("tick rate must be at least 1".to_string()));
        }

        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.screen_width, self.screen_height, self.grid_size)
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

fn invalid(reason: String) -> GameError {
    GameError::InvalidConfig(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let board = config.board();
        assert_eq!(board.columns(), 32);
        assert_eq!(board.rows(), 24);
    }

    #[test]
    fn rejects_canvas_not_aligned_to_grid() {
        let config = Config { grid_size: 7, ..Config::default() };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_grid_without_interior() {
        let config = Config { screen_width: 40, screen_height: 40, ..Config::default() };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let smallest = Config { screen_width: 60, screen_height: 60, ..Config::default() };
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn rejects_zero_grid_and_zero_speed() {
        let no_grid = Config { grid_size: 0, ..Config::default() };
        assert!(no_grid.validate().is_err());

        let frozen = Config { ticks_per_second: 0, ..Config::default() };
        assert!(frozen.validate().is_err());
    }

    #[test]
    fn parses_log_levels() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
