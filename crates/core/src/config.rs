//! Game configuration and construction-time validation.
//!
//! Every transition of the game is total; the only way to get an invalid game
//! is to build one from bad parameters. Those are rejected here, before the
//! first tick, instead of surfacing later as a modulo-by-zero or an empty body.

use thiserror::Error;

use crate::types::{
    Bounds, Cell, Direction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_GROWTH_SPEED,
    DEFAULT_SNAKE_LENGTH,
};

/// Reasons a game cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("growth speed must be at least 1")]
    ZeroGrowthSpeed,
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u16, height: u16 },
    #[error("snake must have at least one cell")]
    EmptySnake,
    #[error("snake of length {length} does not fit on a board {width} cells wide")]
    SnakeTooLong { length: u16, width: u16 },
}

/// Parameters for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub snake_length: u16,
    pub growth_speed: u32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            snake_length: DEFAULT_SNAKE_LENGTH,
            growth_speed: DEFAULT_GROWTH_SPEED,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_board(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_snake_length(mut self, snake_length: u16) -> Self {
        self.snake_length = snake_length;
        self
    }

    pub fn with_growth_speed(mut self, growth_speed: u32) -> Self {
        self.growth_speed = growth_speed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Check every parameter, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.growth_speed == 0 {
            return Err(ConfigError::ZeroGrowthSpeed);
        }
        if self.snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.snake_length > self.width {
            return Err(ConfigError::SnakeTooLong {
                length: self.snake_length,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Starting body: a horizontal line on the top row, head on the right.
    pub fn starting_cells(&self) -> impl Iterator<Item = Cell> {
        (0..self.snake_length as i32).rev().map(|x| Cell::new(x, 0))
    }

    /// Starting heading, away from the body.
    pub fn starting_direction(&self) -> Direction {
        Direction::Right
    }
}
