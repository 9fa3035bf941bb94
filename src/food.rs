use rand::Rng;

use crate::grid::{Cell, Grid};

/// The single piece of food on the board.
///
/// Placement ignores the snake, so food may appear under its body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            position: random_cell(grid, rng),
        }
    }

    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> Cell {
        self.position = random_cell(grid, rng);
        self.position
    }
}

fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Cell {
    Cell::new(rng.random_range(0..grid.width), rng.random_range(0..grid.height))
}
