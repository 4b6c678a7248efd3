// Fixed-capacity snake body.
//
// Segments live in a flat array sized for the largest board; only the
// first `len` slots are meaningful, the rest are stale leftovers from
// earlier, longer snakes. Each move shifts the live prefix by one slot,
// O(len), which is nothing at these board sizes.

use crate::direction::Direction;
use crate::grid::{Cell, Grid};

/// Body capacity; every shipped board has at most this many cells.
pub const MAX_SEGMENTS: usize = 208;

#[derive(Debug, Clone)]
pub struct Snake<const CAP: usize = MAX_SEGMENTS> {
    body: [Cell; CAP],
    len: usize,
    direction: Direction,
}

impl<const CAP: usize> Snake<CAP> {
    pub const CAPACITY: usize = CAP;

    /// Build a snake from `initial` (head first). Segments past `CAP`
    /// are dropped; callers validate through `GameConfig` first.
    pub fn new(initial: &[Cell], direction: Direction) -> Self {
        let mut snake = Self {
            body: [Cell::default(); CAP],
            len: 0,
            direction,
        };
        snake.reset(initial, direction);
        snake
    }

    pub fn reset(&mut self, initial: &[Cell], direction: Direction) {
        let n = initial.len().min(CAP);
        self.body[..n].copy_from_slice(&initial[..n]);
        self.len = n;
        self.direction = direction;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Live segments, head first.
    #[inline]
    pub fn segments(&self) -> &[Cell] {
        &self.body[..self.len]
    }

    pub fn head(&self) -> Option<Cell> {
        self.segments().first().copied()
    }

    pub fn tail(&self) -> Option<Cell> {
        self.segments().last().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments().contains(&cell)
    }

    /// Turn towards `direction` unless it would double back onto the
    /// neck. Returns whether the heading changed.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.direction || self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Take `direction` as the heading with no reversal check. Used once
    /// held buttons have been resolved by `Buttons::steer`.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Cell the head moves into on the next step.
    pub fn next_head(&self, grid: Grid) -> Option<Cell> {
        self.head().map(|h| grid.step(h, self.direction))
    }

    /// Push `head` onto the front of the body.
    ///
    /// With `grow` the body gains a slot (up to `CAP`) and keeps its old
    /// tail; otherwise the old tail falls off and is returned so the
    /// caller can erase it.
    pub fn push_head(&mut self, head: Cell, grow: bool) -> Option<Cell> {
        let vacated = if grow && self.len < CAP {
            self.len += 1;
            None
        } else {
            self.tail()
        };

        for i in (1..self.len).rev() {
            self.body[i] = self.body[i - 1];
        }
        if self.len == 0 {
            self.len = 1;
        }
        self.body[0] = head;
        vacated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: Grid = Grid::new(13, 16);

    fn start() -> Snake {
        Snake::new(
            &[Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1)],
            Direction::Right,
        )
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = start();
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(snake.steer(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.steer(Direction::Down));
    }

    #[test]
    fn move_drops_tail_and_keeps_order() {
        let mut snake = start();
        let head = snake.next_head(GRID).unwrap();
        assert_eq!(head, Cell::new(1, 3));

        let vacated = snake.push_head(head, false);
        assert_eq!(vacated, Some(Cell::new(0, 1)));
        assert_eq!(
            snake.segments(),
            &[Cell::new(1, 3), Cell::new(0, 3), Cell::new(0, 2)]
        );
    }

    #[test]
    fn growth_keeps_tail() {
        let mut snake = start();
        let vacated = snake.push_head(Cell::new(1, 3), true);
        assert_eq!(vacated, None);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn growth_is_capped() {
        let mut snake: Snake<3> = Snake::new(
            &[Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            Direction::Right,
        );
        let vacated = snake.push_head(Cell::new(3, 0), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(vacated, Some(Cell::new(0, 0)));
    }

    #[test]
    fn reset_overwrites_longer_body() {
        let mut snake = start();
        for x in 1..6 {
            snake.push_head(Cell::new(x, 3), true);
        }
        assert_eq!(snake.len(), 8);

        snake.reset(&[Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1)], Direction::Right);
        assert_eq!(snake.len(), 3);
        assert!(!snake.contains(Cell::new(5, 3)));
    }
}
