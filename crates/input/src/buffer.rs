//! Turn buffer for terminal environments.
//!
//! Keys arrive whenever the user presses them, ticks happen on a fixed clock.
//! Buffering the turns lets a quick "down, left" play out over two ticks
//! instead of the second key overwriting the first.

use arrayvec::ArrayVec;

use crate::types::Direction;

/// Maximum number of turns held between ticks.
pub const TURN_BUFFER_CAPACITY: usize = 3;

/// FIFO of pending turns, one consumed per tick.
#[derive(Debug, Clone, Default)]
pub struct TurnBuffer {
    pending: ArrayVec<Direction, TURN_BUFFER_CAPACITY>,
}

impl TurnBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a turn for a snake currently facing `heading`.
    ///
    /// A turn is checked against the last queued turn, or `heading` when the
    /// queue is empty. Turns that would be ignored there (same direction or a
    /// reversal) are dropped so they never use up a tick, as is input beyond
    /// capacity. Returns whether the turn was queued.
    pub fn push(&mut self, direction: Direction, heading: Direction) -> bool {
        let facing = self.pending.last().copied().unwrap_or(heading);
        if direction == facing || direction.is_opposite(facing) {
            return false;
        }
        self.pending.try_push(direction).is_ok()
    }

    /// The turn for this tick, if any.
    pub fn pop(&mut self) -> Option<Direction> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_yields_none() {
        let mut buf = TurnBuffer::new();
        assert_eq!(buf.pop(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let mut buf = TurnBuffer::new();
        assert!(buf.push(Direction::Down, Direction::Right));
        assert!(buf.push(Direction::Left, Direction::Right));
        assert_eq!(buf.pop(), Some(Direction::Down));
        assert_eq!(buf.pop(), Some(Direction::Left));
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_drops_repeats_of_last_turn() {
        let mut buf = TurnBuffer::new();
        assert!(buf.push(Direction::Up, Direction::Right));
        assert!(!buf.push(Direction::Up, Direction::Right));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_current_heading_does_not_delay_next_turn() {
        let mut buf = TurnBuffer::new();
        assert!(!buf.push(Direction::Right, Direction::Right));
        assert!(buf.push(Direction::Down, Direction::Right));
        assert_eq!(buf.pop(), Some(Direction::Down));
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_drops_reversals() {
        let mut buf = TurnBuffer::new();
        assert!(!buf.push(Direction::Left, Direction::Right));
        assert!(buf.is_empty());

        // Checked against the last queued turn, not the snake's heading.
        assert!(buf.push(Direction::Up, Direction::Right));
        assert!(!buf.push(Direction::Down, Direction::Right));
        assert!(buf.push(Direction::Left, Direction::Right));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_drops_input_when_full() {
        let mut buf = TurnBuffer::new();
        assert!(buf.push(Direction::Up, Direction::Right));
        assert!(buf.push(Direction::Left, Direction::Right));
        assert!(buf.push(Direction::Down, Direction::Right));
        assert!(!buf.push(Direction::Right, Direction::Right));
        assert_eq!(buf.len(), TURN_BUFFER_CAPACITY);

        buf.clear();
        assert!(buf.is_empty());
    }
}
