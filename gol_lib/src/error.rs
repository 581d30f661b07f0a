//! The errors that can occur when operating on a board.

use std::time::Duration;

use crate::CellPosition;

/// The errors that can occur when constructing, editing or driving a board.
///
/// Every error is detected before any state is mutated, so a failed operation leaves the board unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum BoardError {
    /// A construction or configuration parameter is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    /// A cell was accessed outside of the board.
    #[error("Cell {position} is outside of the {rows}x{cols} board")]
    OutOfBounds {
        position: CellPosition,
        rows: usize,
        cols: usize,
    },
}

/// The parameters that can be rejected as invalid.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum InvalidArgument {
    /// The fraction of alive cells must be within 0 & 1 (inclusive).
    #[error("Fraction must be between 0 and 1, got {0}")]
    Fraction(f64),
    /// Both dimensions must be positive & the number of cells must be representable.
    #[error("Board dimensions must be positive, got {rows}x{cols}")]
    Dimensions { rows: usize, cols: usize },
    /// The delay between generations must be within the supported range.
    #[error("Delay must be between {}ms and {}ms, got {}ms", min.as_millis(), max.as_millis(), delay.as_millis())]
    Delay {
        delay: Duration,
        min: Duration,
        max: Duration,
    },
    /// The speed slider position must be within the slider range.
    #[error("Slider position must be between {min} and {max}, got {position}")]
    SliderPosition { position: u32, min: u32, max: u32 },
}
