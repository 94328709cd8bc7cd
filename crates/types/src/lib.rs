//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain values with no external dependencies, so they are usable
//! from the game core, the input mapping and the terminal renderer alike.
//!
//! # Coordinates
//!
//! Board coordinates are signed and board-relative:
//!
//! - **Origin**: `(0, 0)` is the top-left cell
//! - **x** grows to the right, **y** grows downward
//! - Cells outside `[0, width) x [0, height)` are representable; that is how
//!   a snake leaving the board is detected
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 20 | Board columns |
//! | `DEFAULT_BOARD_HEIGHT` | 10 | Board rows |
//! | `DEFAULT_SNAKE_LENGTH` | 5 | Starting snake length |
//! | `DEFAULT_GROWTH_SPEED` | 10 | One apple spawn trial in 10 succeeds |
//! | `TICK_MS` | 200 | Fixed simulation step |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Bounds, Cell, Direction};
//!
//! let head = Cell::new(2, 0);
//! assert_eq!(head.step(Direction::Down), Cell::new(2, 1));
//! assert_eq!(head + Direction::Left, Cell::new(1, 0));
//! assert_eq!(head.moved(None), head);
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert!(!Direction::Up.is_opposite(Direction::Left));
//!
//! let bounds = Bounds::new(20, 10);
//! assert!(bounds.contains(Cell::new(19, 9)));
//! assert!(!bounds.contains(Cell::new(0, -1)));
//! ```

use std::fmt;
use std::ops::Add;

/// Board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 10;

/// Length of the snake at game start
pub const DEFAULT_SNAKE_LENGTH: u16 = 5;

/// Apple spawn divisor: each tick spawns with probability `1 / DEFAULT_GROWTH_SPEED`
pub const DEFAULT_GROWTH_SPEED: u32 = 10;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 200;

/// Heading of the snake.
///
/// "No turn this tick" is modelled as `Option::<Direction>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The axis-opposite heading.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True iff the pair is `{Up, Down}` or `{Left, Right}`.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit offset `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit along `direction`.
    ///
    /// Wraps at the `i32` extremes; a wrapped cell is still off any board.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Like [`Cell::step`], but `None` leaves the cell where it is.
    pub fn moved(self, direction: Option<Direction>) -> Self {
        match direction {
            Some(d) => self.step(d),
            None => self,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, rhs: Direction) -> Cell {
        self.step(rhs)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether `cell` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        assert_eq!(DEFAULT_BOARD_WIDTH, 20);
        assert_eq!(DEFAULT_BOARD_HEIGHT, 10);
        assert_eq!(DEFAULT_SNAKE_LENGTH, 5);
        assert!(DEFAULT_GROWTH_SPEED > 0);
        assert_eq!(TICK_MS, 200);
    }

    #[test]
    fn opposite_is_symmetric_and_exact() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.is_opposite(b), b.is_opposite(a));
            }
            assert!(!a.is_opposite(a));
            assert_eq!(a.opposite().opposite(), a);
        }

        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Down.is_opposite(Direction::Left));
    }

    #[test]
    fn cell_steps_one_unit_per_axis() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
        assert_eq!(c.moved(None), c);
    }

    #[test]
    fn cell_can_leave_the_board() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin + Direction::Up, Cell::new(0, -1));
        assert_eq!(origin + Direction::Left, Cell::new(-1, 0));
    }

    #[test]
    fn cell_step_is_total_at_i32_extremes() {
        let east = Cell::new(i32::MAX, 0).step(Direction::Right);
        assert_eq!(east, Cell::new(i32::MIN, 0));
        let north = Cell::new(0, i32::MIN).moved(Some(Direction::Up));
        assert_eq!(north, Cell::new(0, i32::MAX));

        let board = Bounds::new(u16::MAX, u16::MAX);
        assert!(!board.contains(east));
        assert!(!board.contains(north));
    }

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds::new(20, 10);
        assert!(b.contains(Cell::new(0, 0)));
        assert!(b.contains(Cell::new(19, 9)));
        assert!(!b.contains(Cell::new(20, 0)));
        assert!(!b.contains(Cell::new(0, 10)));
        assert!(!b.contains(Cell::new(-1, 3)));
        assert_eq!(b.area(), 200);
        assert!(!b.is_empty());
        assert!(Bounds::new(0, 4).is_empty());
    }

    #[test]
    fn direction_displays_lowercase_name() {
        for d in Direction::ALL {
            assert_eq!(d.to_string(), d.as_str());
        }
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
