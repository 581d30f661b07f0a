//! Contains [`BoardDisplay`].
//! See its documentation for more information.

use std::sync::Arc;

use super::{cell::Cell, position::CellPosition};

/// Holds a snapshot of a board for the ui to display.
///
/// The outer array holds the rows, each sub-array holds the cells of one row.
/// This data type assumes that each sub-array has the same length.
#[derive(Default, Debug, PartialEq, Clone)]
pub struct BoardDisplay {
    /// The generation of the board to be displayed.
    generation: u64,
    /// The cells of the board, indexed by row then column.
    board: Arc<[Box<[Cell]>]>,
}

impl BoardDisplay {
    /// Constructs a new [`BoardDisplay`] with the given generation & the given board to display.
    ///
    /// # Example
    /// Simple way to create the correct board data type.
    /// ```
    /// # use gol_lib::{Cell, BoardDisplay};
    /// # let generation = 0;
    /// let mut board_build = Vec::new();
    /// for _ in 0..4 {
    ///     let mut row_builder = Vec::new();
    ///     for _ in 0..4 {
    ///         row_builder.push(Cell::Dead);
    ///     }
    ///     // Convert the vec into the correct type
    ///     let array: Box<[Cell]> = row_builder.into();
    ///     board_build.push(array);
    /// }
    ///
    /// BoardDisplay::new(generation, board_build);
    /// ```
    pub fn new(generation: u64, board: impl Into<Arc<[Box<[Cell]>]>>) -> Self {
        Self {
            generation,
            board: board.into(),
        }
    }

    /// Gets the generation of the displayed board.
    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    /// Gets the amount of rows.
    pub fn get_rows(&self) -> usize {
        self.board.len()
    }

    /// Gets the amount of columns.
    ///
    /// If there are no rows then there are no columns.
    pub fn get_cols(&self) -> usize {
        self.board.first().map(|row| row.len()).unwrap_or(0)
    }

    /// Gets the cell at the given position.
    ///
    /// If the given position is outside the bounds of the display board then [`Cell::Dead`] will be returned.
    pub fn get_cell(&self, position: impl Into<CellPosition>) -> Cell {
        let position: CellPosition = position.into();

        self.board
            .get(position.get_row())
            .and_then(|row| row.get(position.get_col()))
            .copied()
            .unwrap_or_default()
    }

    /// Iterates over the rows of the displayed board, from the top row down.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.board.iter().map(|row| &**row)
    }
}

#[cfg(test)]
mod board_display_tests {
    use super::*;

    fn generate_board() -> BoardDisplay {
        let mut board_build = Vec::new();
        for _ in 0..5 {
            let mut row_builder = Vec::new();
            for col in 0..6 {
                row_builder.push({
                    if col % 2 == 0 {
                        Cell::Dead
                    } else {
                        Cell::Alive
                    }
                });
            }
            // Convert the vec into the correct type
            let array: Box<[Cell]> = row_builder.into();
            board_build.push(array);
        }

        BoardDisplay::new(7, board_build)
    }

    #[test]
    fn default_is_correct() {
        let board_build: Vec<Box<[Cell]>> = Vec::new();
        assert_eq!(BoardDisplay::default(), BoardDisplay::new(0, board_build))
    }

    #[test]
    /// A cloned snapshot compares equal to its source.
    fn clone_is_equal() {
        let display = generate_board();
        let copy = display.clone();
        assert_eq!(copy, display);
        assert_ne!(copy, BoardDisplay::default());
    }

    #[test]
    /// An empty display has no rows or columns.
    fn default_size() {
        let display = BoardDisplay::default();
        assert_eq!(display.get_rows(), 0);
        assert_eq!(display.get_cols(), 0);
    }

    #[test]
    fn get_size() {
        let display = generate_board();
        assert_eq!(display.get_rows(), 5);
        assert_eq!(display.get_cols(), 6);
    }

    #[test]
    fn get_generation() {
        assert_eq!(generate_board().get_generation(), 7);
    }

    #[test]
    fn dead_out_of_bounds() {
        let cell = BoardDisplay::default().get_cell((2, 2));
        assert_eq!(cell, Cell::Dead);

        let cell = generate_board().get_cell((0, 7));
        assert_eq!(cell, Cell::Dead);
    }

    #[test]
    fn get_cell() {
        let board_display = generate_board();

        assert_eq!(board_display.get_cell((1, 1)), Cell::Alive);
        assert_eq!(board_display.get_cell((3, 4)), Cell::Dead);
    }

    #[test]
    /// Rows are iterated from the top of the board.
    fn iterate_rows() {
        let board_display = generate_board();
        let rows: Vec<&[Cell]> = board_display.rows().collect();

        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row[1] == Cell::Alive && row[0] == Cell::Dead));
    }
}
