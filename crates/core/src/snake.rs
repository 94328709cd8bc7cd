//! Snake module - the body, its heading and deferred growth
//!
//! The body is stored head-first in a `VecDeque` so a move is one
//! `push_front` plus at most one `pop_back`. Growth from eating is not applied
//! immediately: it is banked in `pending_growth` and paid out by the following
//! moves, each of which keeps the last tail cell instead of dropping it.
//!
//! All operations consume the snake and return the next one.

use std::collections::VecDeque;

use log::debug;

use crate::apples::AppleField;
use crate::config::ConfigError;
use crate::types::{Cell, Direction};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake {
    /// Head at the front.
    cells: VecDeque<Cell>,
    direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Build a snake from head-first cells.
    pub fn new<I>(cells: I, direction: Direction) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(ConfigError::EmptySnake);
        }
        Ok(Self {
            cells,
            direction,
            pending_growth: 0,
        })
    }

    pub fn with_pending_growth(mut self, pending_growth: u32) -> Self {
        self.pending_growth = pending_growth;
        self
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Everything behind the head; empty for a one-cell snake.
    pub fn tail(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(1).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the head sits on one of the tail cells.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.tail().any(|c| c == head)
    }

    /// Change heading. `None` and reversals into the neck are ignored.
    pub fn turn(mut self, direction: Option<Direction>) -> Self {
        match direction {
            Some(d) if !d.is_opposite(self.direction) => {
                self.direction = d;
                self
            }
            _ => self,
        }
    }

    /// Step the head forward one cell.
    ///
    /// Without pending growth the last tail cell is dropped and the length is
    /// unchanged; otherwise the body keeps every cell and grows by one.
    pub fn advance(mut self) -> Self {
        let new_head = self.head().step(self.direction);
        self.cells.push_front(new_head);
        if self.pending_growth == 0 {
            self.cells.pop_back();
        } else {
            self.pending_growth -= 1;
        }
        self
    }

    /// Eat the apple under the head, if any.
    pub fn eat<R>(mut self, apples: AppleField<R>) -> (Self, AppleField<R>) {
        let head = self.head();
        if !apples.contains(head) {
            return (self, apples);
        }

        debug!("snake ate apple at {}", head);
        self.pending_growth += 1;
        (self, apples.remove(head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;
    use rand::rngs::mock::StepRng;

    fn snake(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::new(cells.iter().map(|&c| Cell::from(c)), direction).unwrap()
    }

    fn body(s: &Snake) -> Vec<(i32, i32)> {
        s.cells().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_empty_snake_rejected() {
        assert_eq!(
            Snake::new(Vec::new(), Direction::Right),
            Err(ConfigError::EmptySnake)
        );
    }

    #[test]
    fn test_head_and_tail() {
        let s = snake(&[(2, 0), (1, 0), (0, 0)], Direction::Right);
        assert_eq!(s.head(), Cell::new(2, 0));
        assert_eq!(
            s.tail().collect::<Vec<_>>(),
            vec![Cell::new(1, 0), Cell::new(0, 0)]
        );

        let single = snake(&[(0, 0)], Direction::Up);
        assert_eq!(single.tail().count(), 0);
    }

    #[test]
    fn test_moves_right() {
        let s = snake(&[(2, 0), (1, 0), (0, 0)], Direction::Right).advance();
        assert_eq!(body(&s), vec![(3, 0), (2, 0), (1, 0)]);
        assert_eq!(s.direction(), Direction::Right);
    }

    #[test]
    fn test_changes_direction() {
        let s = snake(&[(2, 0), (1, 0), (0, 0)], Direction::Right)
            .turn(Some(Direction::Down))
            .advance();
        assert_eq!(body(&s), vec![(2, 1), (2, 0), (1, 0)]);
        assert_eq!(s.direction(), Direction::Down);
    }

    #[test]
    fn test_turn_rejects_reversal_and_none() {
        let s = snake(&[(2, 0), (1, 0), (0, 0)], Direction::Right);
        assert_eq!(s.clone().turn(Some(Direction::Left)), s);
        assert_eq!(s.clone().turn(None), s);
        assert_eq!(
            s.clone().turn(Some(Direction::Up)).direction(),
            Direction::Up
        );
        assert_eq!(
            s.clone().turn(Some(Direction::Right)).direction(),
            Direction::Right
        );
    }

    #[test]
    fn test_move_preserves_length_without_growth() {
        let mut s = snake(&[(5, 5), (4, 5), (3, 5), (2, 5)], Direction::Right);
        for d in [Direction::Down, Direction::Left, Direction::Up, Direction::Up] {
            s = s.turn(Some(d)).advance();
            assert_eq!(s.len(), 4);
        }
    }

    #[test]
    fn test_pending_growth_extends_one_cell_per_move() {
        let s = snake(&[(2, 0), (1, 0)], Direction::Right).with_pending_growth(2);

        let s = s.advance();
        assert_eq!(body(&s), vec![(3, 0), (2, 0), (1, 0)]);
        assert_eq!(s.pending_growth(), 1);

        let s = s.advance();
        assert_eq!(s.len(), 4);
        assert_eq!(s.pending_growth(), 0);

        let s = s.advance();
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_eat_banks_growth_and_removes_apple() {
        let apples = AppleField::new(Bounds::new(10, 10), 1, StepRng::new(0, 0))
            .unwrap()
            .with_apples([Cell::new(3, 0), Cell::new(7, 7)]);
        let s = snake(&[(2, 0), (1, 0), (0, 0)], Direction::Right).advance();

        let (s, apples) = s.eat(apples);
        assert_eq!(s.pending_growth(), 1);
        assert_eq!(s.len(), 3);
        assert_eq!(apples.cells(), &[Cell::new(7, 7)]);

        // Growth shows up on the following move.
        let s = s.advance();
        assert_eq!(s.len(), 4);
        assert_eq!(s.pending_growth(), 0);
    }

    #[test]
    fn test_eat_without_apple_is_noop() {
        let apples = AppleField::new(Bounds::new(10, 10), 1, StepRng::new(0, 0))
            .unwrap()
            .with_apples([Cell::new(9, 9)]);
        let s = snake(&[(2, 0), (1, 0)], Direction::Right);

        let (after, apples_after) = s.clone().eat(apples.clone());
        assert_eq!(after, s);
        assert_eq!(apples_after, apples);
    }

    #[test]
    fn test_advance_past_i32_edge_does_not_panic() {
        let s = snake(&[(i32::MAX, 0)], Direction::Right).advance();
        assert_eq!(s.head(), Cell::new(i32::MIN, 0));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_bites_itself() {
        // Head at (1,1) coming back onto the body.
        let s = snake(&[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)], Direction::Up);
        assert!(s.bites_itself());

        let s = snake(&[(1, 1), (2, 1), (2, 2)], Direction::Up);
        assert!(!s.bites_itself());
    }
}
