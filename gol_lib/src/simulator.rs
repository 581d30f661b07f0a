use crate::{BoardDisplay, BoardError, Cell, CellPosition, observer::Observer};

/// An implementation of [`Simulator`] can simulate Conways game of life.
///
/// Each implementation is guaranteed to correctly simulate Conways game of life under the standard B3/S23 rule,
/// however the performance of any implementation is not guaranteed.
pub trait Simulator: Send {
    /// The amount of rows on the board.
    fn rows(&self) -> usize;

    /// The amount of columns on the board.
    fn cols(&self) -> usize;

    /// Gets whether the cell at the given position is alive.
    fn is_alive(&self, position: CellPosition) -> Result<bool, BoardError>;

    /// Sets the cell at the given position on the board.
    ///
    /// This does not change the generation of the board.
    fn set_cell(&mut self, position: CellPosition, cell: Cell) -> Result<(), BoardError>;

    /// Advances the simulation by one generation.
    fn advance_generation(&mut self);

    /// Sets all cells on the board to dead & sets the generation to 0.
    fn reset(&mut self);

    /// Gets the current generation of simulation.
    fn generation_count(&self) -> u64;

    /// Registers an observer that is notified after every change to the board.
    fn subscribe(&mut self, observer: Observer);

    /// Flips the state of the cell at the given position.
    fn toggle_cell(&mut self, position: CellPosition) -> Result<Cell, BoardError> {
        let toggled = Cell::from(self.is_alive(position)?).invert();
        self.set_cell(position, toggled)?;
        Ok(toggled)
    }

    /// Creates a snapshot of the whole board for the ui to display.
    fn snapshot(&self) -> BoardDisplay {
        let mut board_build = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let row_builder: Box<[Cell]> = (0..self.cols())
                .map(|col| {
                    self.is_alive(CellPosition::new(row, col))
                        .map(Cell::from)
                        .unwrap_or_default()
                })
                .collect();
            board_build.push(row_builder);
        }

        BoardDisplay::new(self.generation_count(), board_build)
    }
}
