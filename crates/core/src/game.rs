//! Game module - one tick of the simulation
//!
//! A tick runs, in this fixed order:
//!
//! 1. turn the snake toward the requested direction
//! 2. move it one cell
//! 3. run the apple spawn trial
//! 4. let the snake eat whatever is under its head
//!
//! The game is over once the head lands on the tail or any body cell leaves the
//! board. That state is absorbing: `update` hands the same game back unchanged.

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::apples::AppleField;
use crate::config::{ConfigError, GameConfig};
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{Bounds, Direction};

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    Over,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<R = StdRng> {
    bounds: Bounds,
    snake: Snake,
    apples: AppleField<R>,
}

impl Game<StdRng> {
    /// Starting game for `config`, with apples seeded from `config.seed`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let snake = Snake::new(config.starting_cells(), config.starting_direction())?;
        let apples = AppleField::new(
            config.bounds(),
            config.growth_speed,
            StdRng::seed_from_u64(config.seed),
        )?;
        Ok(Self::new(snake, apples))
    }
}

impl<R: Rng> Game<R> {
    /// Advance one tick. A finished game is returned as is.
    pub fn update(self, direction: Option<Direction>) -> Self {
        if self.is_over() {
            return self;
        }

        let Game {
            bounds,
            snake,
            apples,
        } = self;

        let snake = snake.turn(direction).advance();
        let apples = apples.grow();
        let (snake, apples) = snake.eat(apples);

        let next = Game {
            bounds,
            snake,
            apples,
        };
        if next.is_over() {
            debug!(
                "game over at {} with score {}",
                next.snake.head(),
                next.score()
            );
        }
        next
    }
}

impl<R> Game<R> {
    /// The board size is taken from the apple field.
    pub fn new(snake: Snake, apples: AppleField<R>) -> Self {
        Self {
            bounds: apples.bounds(),
            snake,
            apples,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> u16 {
        self.bounds.width
    }

    pub fn height(&self) -> u16 {
        self.bounds.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apples(&self) -> &AppleField<R> {
        &self.apples
    }

    pub fn is_over(&self) -> bool {
        self.snake.bites_itself() || self.snake.cells().any(|c| !self.bounds.contains(c))
    }

    pub fn status(&self) -> Status {
        if self.is_over() {
            Status::Over
        } else {
            Status::Running
        }
    }

    /// Snake length, head included.
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out`, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.bounds = self.bounds;
        out.direction = self.snake.direction();
        out.snake.clear();
        out.snake.extend(self.snake.cells());
        out.apples.clear();
        out.apples.extend_from_slice(self.apples.cells());
        out.game_over = self.is_over();
        out.score = self.score();
    }
}

impl<R> fmt::Display for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
