//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Direction`] turns and buffers the turns that
//! arrive between two ticks so each tick consumes at most one.

pub mod buffer;
pub mod map;

pub use tui_snake_types as types;

pub use buffer::TurnBuffer;
pub use map::{key_to_direction, should_quit};
