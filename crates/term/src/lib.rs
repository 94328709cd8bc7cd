//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`] into a framebuffer of styled characters, and flushes
//! that framebuffer to the terminal with full or diff redraws.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the snapshot-to-framebuffer mapping pure so it can be unit-tested
//! - Allow control over aspect ratio (e.g. 2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
