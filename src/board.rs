use rand::Rng;

use crate::Cell;
use crate::snake::Direction;

/// Toroidal grid laid over a pixel canvas. Cells are addressed by the pixel
/// coordinates of their top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Board { width, height, cell_size }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn center(&self) -> Cell {
        (self.columns() / 2 * self.cell_size, self.rows() / 2 * self.cell_size)
    }

    /// The cell one step away in `dir`, wrapping around each edge.
    pub fn step(&self, from: Cell, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        (
            (from.0 + dx * self.cell_size).rem_euclid(self.width),
            (from.1 + dy * self.cell_size).rem_euclid(self.height),
        )
    }

    /// True for cells off the outermost row and column.
    pub fn is_interior(&self, cell: Cell) -> bool {
        let (max_x, max_y) = (self.width - 2 * self.cell_size, self.height - 2 * self.cell_size);
        (self.cell_size..=max_x).contains(&cell.0) && (self.cell_size..=max_y).contains(&cell.1)
    }

    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..self.rows() - 1).flat_map(move |row| {
            (1..self.columns() - 1).map(move |col| (col * self.cell_size, row * self.cell_size))
        })
    }

    /// Any grid-aligned cell of the canvas, each axis drawn uniformly.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        (
            rng.gen_range(0..self.columns()) * self.cell_size,
            rng.gen_range(0..self.rows()) * self.cell_size,
        )
    }
}
