use rand::Rng;

use crate::Cell;
use crate::board::Board;
use crate::config::Palette;
use crate::error::Result;
use crate::render::{Draw, Renderer};

pub struct Apple {
    position: Cell,
}

impl Apple {
    /// Places the apple anywhere in the interior, snake or not.
    pub fn new(board: &Board, rng: &mut impl Rng) -> Self {
        let mut apple = Apple { position: board.center() };
        apple.randomize_position(board, &[], rng);
        apple
    }

    #[cfg(test)]
    pub fn at(position: Cell) -> Self {
        Apple { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the apple to a random interior cell outside `occupied`.
    /// Returns `None`, leaving the apple where it was, when no such cell exists.
    pub fn randomize_position(&mut self, board: &Board, occupied: &[Cell], rng: &mut impl Rng) -> Option<Cell> {
        if board.interior_cells().all(|cell| occupied.contains(&cell)) {
            return None;
        }

        loop {
            let cell = board.random_cell(rng);
            if board.is_interior(cell) && !occupied.contains(&cell) {
                self.position = cell;
                return Some(cell);
            }
        }
    }
}

impl Draw for Apple {
    fn draw<R: Renderer>(&self, renderer: &mut R, palette: &Palette) -> Result<()> {
        renderer.draw_cell(self.position, palette.apple, true)
    }
}
