//! Apple field - collectible cells and their spawn policy
//!
//! Each tick runs one spawn trial: with probability `1 / growth_speed` a cell is
//! drawn uniformly from the board and becomes an apple, unless an apple is
//! already there. A collision discards the spawn for that tick (no retry), so
//! the field never holds the same coordinate twice.
//!
//! The random source is a type parameter so tests can drive the field with a
//! seeded or mock generator.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::ConfigError;
use crate::types::{Bounds, Cell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleField<R = StdRng> {
    cells: Vec<Cell>,
    bounds: Bounds,
    growth_speed: u32,
    rng: R,
}

impl<R: Rng> AppleField<R> {
    /// Create an empty field.
    pub fn new(bounds: Bounds, growth_speed: u32, rng: R) -> Result<Self, ConfigError> {
        if bounds.is_empty() {
            return Err(ConfigError::EmptyBoard {
                width: bounds.width,
                height: bounds.height,
            });
        }
        if growth_speed == 0 {
            return Err(ConfigError::ZeroGrowthSpeed);
        }
        Ok(Self {
            cells: Vec::new(),
            bounds,
            growth_speed,
            rng,
        })
    }

    /// Run this tick's spawn trial.
    pub fn grow(mut self) -> Self {
        if self.rng.gen_range(0..self.growth_speed) != 0 {
            return self;
        }

        let candidate = Cell::new(
            self.rng.gen_range(0..self.bounds.width as i32),
            self.rng.gen_range(0..self.bounds.height as i32),
        );
        if self.cells.contains(&candidate) {
            return self;
        }

        debug!("apple spawned at {}", candidate);
        self.cells.push(candidate);
        self
    }
}

impl<R> AppleField<R> {
    /// Add apples, skipping coordinates that are already taken.
    pub fn with_apples<I>(mut self, apples: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in apples {
            if !self.cells.contains(&cell) {
                self.cells.push(cell);
            }
        }
        self
    }

    /// Drop the apple at `cell`. Order of the remaining apples is not kept.
    pub fn remove(mut self, cell: Cell) -> Self {
        if let Some(idx) = self.cells.iter().position(|&c| c == cell) {
            self.cells.swap_remove(idx);
        }
        self
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn growth_speed(&self) -> u32 {
        self.growth_speed
    }
}
