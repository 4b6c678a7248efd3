// Toroidal board geometry.
// Cells are signed so a step off either edge can be expressed before
// it is wrapped back onto the board.

use crate::direction::Direction;

/// One board cell, column `x` and row `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Neighbour of `cell` one unit along `direction`, wrapped onto the torus.
    pub fn step(self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: wrap(cell.x + dx, self.width),
            y: wrap(cell.y + dy, self.height),
        }
    }
}

// only ever one unit outside [0, bound)
#[inline]
fn wrap(v: i16, bound: i16) -> i16 {
    if v >= bound {
        0
    } else if v < 0 {
        bound - 1
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: Grid = Grid::new(13, 16);

    #[test]
    fn step_moves_one_unit() {
        let c = Cell::new(5, 5);
        assert_eq!(GRID.step(c, Direction::Left), Cell::new(4, 5));
        assert_eq!(GRID.step(c, Direction::Up), Cell::new(5, 4));
        assert_eq!(GRID.step(c, Direction::Down), Cell::new(5, 6));
        assert_eq!(GRID.step(c, Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn horizontal_wraparound() {
        assert_eq!(GRID.step(Cell::new(0, 3), Direction::Left), Cell::new(12, 3));
        assert_eq!(GRID.step(Cell::new(12, 3), Direction::Right), Cell::new(0, 3));
    }

    #[test]
    fn vertical_wraparound() {
        assert_eq!(GRID.step(Cell::new(4, 0), Direction::Up), Cell::new(4, 15));
        assert_eq!(GRID.step(Cell::new(4, 15), Direction::Down), Cell::new(4, 0));
    }

    #[test]
    fn contains_and_count() {
        assert_eq!(GRID.cell_count(), 208);
        assert!(GRID.contains(Cell::new(12, 15)));
        assert!(!GRID.contains(Cell::new(13, 0)));
        assert!(!GRID.contains(Cell::new(0, -1)));
    }
}
