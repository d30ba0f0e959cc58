use core::num::NonZeroUsize;
use serde::Serialize;

/// Where a card sits on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

/// A fixed-width grid filled row-major by sequential index, with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: NonZeroUsize,
}

impl GridLayout {
    #[must_use]
    pub const fn new(columns: NonZeroUsize) -> Self {
        Self { columns }
    }

    #[must_use]
    pub const fn columns(&self) -> NonZeroUsize {
        self.columns
    }

    #[must_use]
    pub const fn position(&self, index: usize) -> GridPosition {
        let width = self.columns.get();
        GridPosition {
            row: index / width,
            column: index % width,
        }
    }

    /// Number of rows needed to hold `count` items.
    #[must_use]
    pub const fn row_count(&self, count: usize) -> usize {
        count.div_ceil(self.columns.get())
    }

    /// Split `items` into grid rows; only the last row may be short.
    pub fn rows<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> {
        items.chunks(self.columns.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(columns: usize) -> GridLayout {
        GridLayout::new(NonZeroUsize::new(columns).unwrap())
    }

    #[test]
    fn test_position_row_major() {
        let grid = layout(4);
        assert_eq!(grid.position(0), GridPosition { row: 0, column: 0 });
        assert_eq!(grid.position(3), GridPosition { row: 0, column: 3 });
        assert_eq!(grid.position(4), GridPosition { row: 1, column: 0 });
        assert_eq!(grid.position(9), GridPosition { row: 2, column: 1 });
    }

    #[test]
    fn test_positions_have_no_gaps() {
        let grid = layout(3);
        let positions: Vec<_> = (0..7).map(|i| grid.position(i)).collect();
        for (i, position) in positions.iter().enumerate() {
            assert_eq!(position.row * 3 + position.column, i);
        }
    }

    #[test]
    fn test_single_column() {
        let grid = layout(1);
        assert_eq!(grid.position(5), GridPosition { row: 5, column: 0 });
        assert_eq!(grid.row_count(5), 5);
    }

    #[test]
    fn test_row_count() {
        let grid = layout(4);
        assert_eq!(grid.row_count(0), 0);
        assert_eq!(grid.row_count(4), 1);
        assert_eq!(grid.row_count(5), 2);
    }

    #[test]
    fn test_rows() {
        let grid = layout(4);
        let items = [1, 2, 3, 4, 5, 6];
        let rows: Vec<&[i32]> = grid.rows(&items).collect();
        assert_eq!(rows, vec![&[1, 2, 3, 4][..], &[5, 6][..]]);
    }
}
