// Apple placement by rejection sampling.
//
// A draw is uniform over the whole board and retried while it lands on
// the snake. Expected draws are W*H / (W*H - len), so the loop is short
// until the board is nearly full. A completely full board has nowhere
// to put an apple and yields None instead of spinning.

use log::warn;
use rand::{Rng, RngCore};

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

pub fn place_apple<R, const CAP: usize>(grid: Grid, snake: &Snake<CAP>, rng: &mut R) -> Option<Cell>
where
    R: RngCore + ?Sized,
{
    if snake.len() >= grid.cell_count() {
        warn!("apple: board full ({} segments), no free cell", snake.len());
        return None;
    }

    loop {
        let cell = Cell::new(
            rng.random_range(0..grid.width),
            rng.random_range(0..grid.height),
        );
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
}
