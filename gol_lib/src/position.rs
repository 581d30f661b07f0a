/// The row & column of a [`Cell`] on a Conways game of life board.
///
/// Rows & columns are counted from zero, starting at the "top-left" of the board.
/// To move "down" on the board, the row must be increased.
/// To move "right" on the board, the column must be increased.
///
/// [`Cell`]: crate::Cell
#[derive(Eq, Hash, PartialEq, Clone, Copy, Debug)]
pub struct CellPosition {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl CellPosition {
    /// Creates a new [`CellPosition`] at the given row & column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Gets the represented row.
    pub fn get_row(&self) -> usize {
        self.row
    }

    /// Gets the represented column.
    pub fn get_col(&self) -> usize {
        self.col
    }

    /// Returns the position moved by the given row & column offsets.
    ///
    /// If the moved position would have a negative row or column, [`None`] is returned.
    pub fn offset(&self, row_offset: isize, col_offset: isize) -> Option<CellPosition> {
        Some(CellPosition {
            row: self.row.checked_add_signed(row_offset)?,
            col: self.col.checked_add_signed(col_offset)?,
        })
    }
}

impl From<(usize, usize)> for CellPosition {
    fn from(value: (usize, usize)) -> Self {
        CellPosition {
            row: value.0,
            col: value.1,
        }
    }
}

impl std::fmt::Display for CellPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        let position: CellPosition = (3, 7).into();
        assert_eq!(position.get_row(), 3);
        assert_eq!(position.get_col(), 7);
    }

    #[test]
    /// Offsets that move past row or column zero have no position.
    fn offset_below_zero() {
        let origin = CellPosition::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(-1, -1), None);
    }

    #[test]
    fn offset_in_range() {
        let position = CellPosition::new(2, 2);
        assert_eq!(position.offset(-1, 1), Some((1, 3).into()));
        assert_eq!(position.offset(1, -2), Some((3, 0).into()));
        assert_eq!(position.offset(0, 0), Some(position));
    }
}
