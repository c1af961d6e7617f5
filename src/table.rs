//! Fixed-size 2-D tables used by the tabulation engines.
//!
//! A [`Table`] is allocated once with its final dimensions and filled cell by
//! cell. Storage is a single row-major `Vec`, indexed with `(row, col)` pairs.

use std::ops::{Index, IndexMut};

/// Row-major 2-D array of DP cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// Allocate a `rows x cols` table with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Table<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the table has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checked access; `None` when `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics, and a zero-width table still has `rows` empty rows
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let at = self.offset(row, col);
        &mut self.cells[at]
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn zero_sized_table_is_empty() {
        let t: Table<u32> = Table::filled(0, 5, 0);
        assert_eq!(t.rows(), 0);
        assert!(t.is_empty());
        assert_eq!(t.iter_rows().count(), 0);
    }

    #[test]
    fn zero_width_rows_still_iterate() {
        let t: Table<u32> = Table::filled(3, 0, 0);
        assert!(t.is_empty());
        assert_eq!(t.iter_rows().count(), 3);
        assert!(t.iter_rows().all(|r| r.is_empty()));
    }

    #[test]
    fn row_major_indexing() {
        let mut t = Table::filled(2, 3, 0u64);
        t[(1, 2)] = 7;
        t[(0, 1)] = 4;
        assert_eq!(t.row(0), &[0, 4, 0]);
        assert_eq!(t.row(1), &[0, 0, 7]);
        assert_eq!(t.get(1, 2), Some(&7));
        assert_eq!(t.get(2, 0), None);
        assert_eq!(t.get(0, 3), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let t = Table::filled(2, 2, 0u8);
        let _ = t[(0, 2)];
    }
}
