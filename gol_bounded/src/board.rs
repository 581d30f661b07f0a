use bitvec::{boxed::BitBox, vec::BitVec};
use gol_lib::{
    BoardError, BoardEvent, Cell, CellPosition, InvalidArgument, Observer, Observers, Simulator,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::{self, Dimensions};

/// Represents a fixed-size board that the cells inhabit.
///
/// The board is double buffered: each generation is computed from `current` into `next`, then the two buffers are
/// swapped. No cell of a generation is visible before every cell of that generation has been decided.
pub struct Board {
    /// The size of the board.
    dimensions: Dimensions,

    /// The cells of the board as they are currently, indexed row by row.
    current: BitBox,
    /// The buffer the following generation is computed into.
    /// It is all dead whenever a generation is not being computed.
    next: BitBox,

    /// The generation that this simulation is on.
    generation: u64,
    /// The dependents to notify when the board changes.
    observers: Observers,
}

impl Board {
    /// Creates a board with all cells dead, at generation 0.
    ///
    /// Fails if either dimension is zero.
    pub fn new_blank(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let dimensions = Dimensions::new(rows, cols)?;

        Ok(Self {
            dimensions,
            current: blank_buffer(dimensions),
            next: blank_buffer(dimensions),
            generation: 0,
            observers: Observers::default(),
        })
    }

    /// Creates a board where each cell is independently alive with the probability `fraction`.
    ///
    /// Fails if either dimension is zero or if `fraction` is not within 0 & 1 (inclusive).
    pub fn new_random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        fraction: f64,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(InvalidArgument::Fraction(fraction).into());
        }

        let mut board = Self::new_blank(rows, cols)?;
        board.current = (0..board.dimensions.len())
            .map(|_| rng.gen_bool(fraction))
            .collect::<BitVec>()
            .into_boxed_bitslice();

        Ok(board)
    }

    /// Creates a randomly populated board, the same way as [`Self::new_random`], from a seed.
    ///
    /// The same seed always creates the same board.
    pub fn new_seeded(rows: usize, cols: usize, fraction: f64, seed: u64) -> Result<Self, BoardError> {
        Self::new_random(rows, cols, fraction, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// The amount of alive cells on the board.
    pub fn population(&self) -> usize {
        self.current.count_ones()
    }

    /// Exchanges the buffers & clears the one that is now `next`, so no stale cells are used in a later generation.
    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(false);
    }
}

/// Creates a buffer with every cell dead.
fn blank_buffer(dimensions: Dimensions) -> BitBox {
    BitVec::repeat(false, dimensions.len()).into_boxed_bitslice()
}

impl Simulator for Board {
    fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    fn cols(&self) -> usize {
        self.dimensions.cols()
    }

    fn is_alive(&self, position: CellPosition) -> Result<bool, BoardError> {
        let index = self.dimensions.checked_index(position)?;
        Ok(self.current[index])
    }

    fn set_cell(&mut self, position: CellPosition, cell: Cell) -> Result<(), BoardError> {
        let index = self.dimensions.checked_index(position)?;
        self.current.set(index, cell.is_alive());

        self.observers
            .notify(BoardEvent::CellChanged { position, cell });
        Ok(())
    }

    fn advance_generation(&mut self) {
        engine::compute_generation(&self.current, &mut self.next, self.dimensions);
        self.swap_buffers();
        self.generation += 1;

        log::trace!(
            "Advanced to generation {} with {} alive cells",
            self.generation,
            self.population()
        );

        self.observers.notify(BoardEvent::BoardChanged {
            generation: self.generation,
        });
    }

    fn reset(&mut self) {
        self.current.fill(false);
        self.next.fill(false);
        self.generation = 0;

        self.observers.notify(BoardEvent::BoardChanged {
            generation: self.generation,
        });
    }

    fn generation_count(&self) -> u64 {
        self.generation
    }

    fn subscribe(&mut self, observer: Observer) {
        let initial_event = BoardEvent::BoardChanged {
            generation: self.generation,
        };
        self.observers.subscribe_with(observer, initial_event);
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("dimensions", &self.dimensions)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .field("observers", &self.observers)
            .finish()
    }
}
