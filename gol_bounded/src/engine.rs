//! Computes the next generation of a board under the standard B3/S23 rule.

use bitvec::slice::BitSlice;
use gol_lib::{BoardError, Cell, CellPosition, InvalidArgument};

/// The row & column offsets of the eight cells surrounding a cell.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The size of a board, along with the mapping from positions to cell indices.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Both dimensions must be positive & the total amount of cells must fit in a [`usize`].
    pub(crate) fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        match rows.checked_mul(cols) {
            Some(cells) if cells > 0 => Ok(Self { rows, cols }),
            _ => Err(InvalidArgument::Dimensions { rows, cols }.into()),
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// The total amount of cells.
    pub(crate) fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Gets the index of the cell at the given position, if it is on the board.
    pub(crate) fn index(&self, position: CellPosition) -> Option<usize> {
        (position.get_row() < self.rows && position.get_col() < self.cols)
            .then(|| position.get_row() * self.cols + position.get_col())
    }

    /// Gets the index of the cell at the given position, or an error describing why it is not on the board.
    pub(crate) fn checked_index(&self, position: CellPosition) -> Result<usize, BoardError> {
        self.index(position).ok_or_else(|| BoardError::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Iterates over every position on the board, row by row.
    pub(crate) fn positions(&self) -> impl Iterator<Item = CellPosition> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellPosition::new(row, col)))
    }
}

/// Counts the alive cells surrounding the given position.
///
/// Neighbours that would be off the board count as dead.
pub(crate) fn count_neighbours(cells: &BitSlice, dimensions: Dimensions, position: CellPosition) -> u8 {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(|&(row_offset, col_offset)| position.offset(row_offset, col_offset))
        .filter_map(|neighbour| dimensions.index(neighbour))
        .filter(|&index| cells[index])
        .count() as u8
}

/// Decides whether a cell is alive in the next generation.
pub(crate) fn decide_fate(cell: Cell, alive_neighbours: u8) -> Cell {
    match (cell, alive_neighbours) {
        // Under population
        (Cell::Alive, 0 | 1) => Cell::Dead,
        // Survival
        (Cell::Alive, 2 | 3) => Cell::Alive,
        // Over population
        (Cell::Alive, _) => Cell::Dead,
        // Reproduction
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Writes the generation following `current` into `next`.
///
/// Every cell of `next` is overwritten. `current` is only read, so every cell is decided from the same generation.
pub(crate) fn compute_generation(current: &BitSlice, next: &mut BitSlice, dimensions: Dimensions) {
    for position in dimensions.positions() {
        // Positions produced by the dimensions are always on the board.
        let index = position.get_row() * dimensions.cols() + position.get_col();

        let cell = Cell::from(current[index]);
        let alive_neighbours = count_neighbours(current, dimensions, position);
        next.set(index, decide_fate(cell, alive_neighbours).into());
    }
}
