//! A fixed-size implementation of [`Simulator`].
//! Cells beyond the edge of the board are permanently dead; the board does not wrap around.
//!
//! [`Simulator`]: gol_lib::Simulator

mod board;
mod engine;

pub use board::Board;
