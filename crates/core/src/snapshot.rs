//! Renderer-facing copy of a game, plus its plain ASCII rendering.

use std::fmt;

use crate::types::{Bounds, Cell, Direction};

/// Glyph for the snake's head.
pub const HEAD_GLYPH: char = 'Q';
/// Glyph for every tail segment.
pub const TAIL_GLYPH: char = 'o';
/// Glyph for an apple.
pub const APPLE_GLYPH: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub bounds: Bounds,
    /// Head first.
    pub snake: Vec<Cell>,
    pub direction: Direction,
    pub apples: Vec<Cell>,
    pub game_over: bool,
    pub score: usize,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            snake: Vec::new(),
            direction: Direction::Right,
            apples: Vec::new(),
            game_over: false,
            score: 0,
        }
    }
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn tail(&self) -> &[Cell] {
        self.snake.get(1..).unwrap_or(&[])
    }

    /// Glyph drawn at `cell`, if anything occupies it. The head wins over the
    /// tail, which wins over apples.
    pub fn glyph_at(&self, cell: Cell) -> Option<char> {
        if self.head() == Some(cell) {
            Some(HEAD_GLYPH)
        } else if self.tail().contains(&cell) {
            Some(TAIL_GLYPH)
        } else if self.apples.contains(&cell) {
            Some(APPLE_GLYPH)
        } else {
            None
        }
    }
}

/// ASCII art: a `+-|` box around the board, then a score line.
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.bounds.width as usize;
        let h = self.bounds.height as usize;

        let mut grid = vec![vec![' '; w]; h];
        let mut put = |cell: Cell, ch: char| {
            if self.bounds.contains(cell) {
                grid[cell.y as usize][cell.x as usize] = ch;
            }
        };
        for &apple in &self.apples {
            put(apple, APPLE_GLYPH);
        }
        for &segment in self.tail() {
            put(segment, TAIL_GLYPH);
        }
        if let Some(head) = self.head() {
            put(head, HEAD_GLYPH);
        }

        let rule = "-".repeat(w);
        writeln!(f, "+{}+", rule)?;
        for row in &grid {
            writeln!(f, "|{}|", row.iter().collect::<String>())?;
        }
        writeln!(f, "+{}+", rule)?;

        if self.game_over {
            write!(f, "Game over! Score: {}", self.score)
        } else {
            write!(f, "Score: {}", self.score)
        }
    }
}
