//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules and state of the snake game. It has **no
//! dependencies** on the terminal, input handling or I/O, which makes it:
//!
//! - **Deterministic**: the only randomness is the generator handed to the
//!   apple field, so the same seed replays the same game
//! - **Testable**: every rule is a plain function of values
//! - **Portable**: headless, terminal, or anything else can drive it
//!
//! # Module Structure
//!
//! - [`snake`]: the body, its heading and deferred growth
//! - [`apples`]: apple cells and the per-tick spawn trial
//! - [`game`]: one tick of the simulation and the game-over rule
//! - [`config`]: starting parameters and construction-time validation
//! - [`snapshot`]: renderer-facing copy of a game and its ASCII art
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick; reversing straight into its own neck
//!   is ignored
//! - Every tick spawns an apple with probability `1 / growth_speed` at a random
//!   cell; a spawn on an existing apple is dropped
//! - Eating an apple makes the snake one cell longer on the following move
//! - Hitting the tail or leaving the board ends the game for good
//! - The score is the snake's length
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Game, GameConfig};
//! use tui_snake_types::Direction;
//!
//! let game = Game::from_config(&GameConfig::default().with_seed(12345)).unwrap();
//! assert_eq!(game.score(), 5);
//!
//! let game = game.update(Some(Direction::Down)).update(None);
//! assert!(!game.is_over());
//! assert!(game.score() >= 5);
//! ```

pub mod apples;
pub mod config;
pub mod game;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use apples::AppleField;
pub use config::{ConfigError, GameConfig};
pub use game::{Game, Status};
pub use snake::Snake;
pub use snapshot::{GameSnapshot, APPLE_GLYPH, HEAD_GLYPH, TAIL_GLYPH};
