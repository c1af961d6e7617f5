//! The 9x9 Sudoku grid.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Side length of the grid.
pub const SIZE: usize = 9;
/// Side length of one box.
pub const BOX: usize = 3;

/// A 9x9 grid of digits, `0` meaning empty.
///
/// Construction only checks that every cell holds 0-9. Whether the filled
/// cells are mutually consistent is a separate question answered by
/// [`Grid::is_consistent`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// A grid with every cell empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Result<Self, InputError> {
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v as usize > SIZE {
                    return Err(InputError::DigitOutOfRange {
                        row: r,
                        col: c,
                        value: u32::from(v),
                    });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Build from nested vectors, checking the 9x9 shape.
    pub fn from_vecs(rows: &[Vec<u32>]) -> Result<Self, InputError> {
        if rows.len() != SIZE || rows.iter().any(|r| r.len() != SIZE) {
            return Err(InputError::WrongShape { rows: rows.len() });
        }
        let mut cells = [[0u8; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = u8::try_from(v)
                    .ok()
                    .filter(|&d| d as usize <= SIZE)
                    .ok_or(InputError::DigitOutOfRange {
                        row: r,
                        col: c,
                        value: v,
                    })?;
            }
        }
        Ok(Self { cells })
    }

    /// Digit at `(row, col)`, `0` if empty.
    ///
    /// # Panics
    /// If `row` or `col` is 9 or more. See [`Grid::try_get`].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Digit at `(row, col)`, or `None` outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite one cell; `digit` 0 clears it.
    pub fn set(&mut self, row: usize, col: usize, digit: u8) -> Result<(), InputError> {
        if row >= SIZE || col >= SIZE {
            return Err(InputError::CellOutOfRange { row, col });
        }
        if digit as usize > SIZE {
            return Err(InputError::DigitOutOfRange {
                row,
                col,
                value: u32::from(digit),
            });
        }
        self.cells[row][col] = digit;
        Ok(())
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, digit: u8) {
        debug_assert!(digit as usize <= SIZE);
        self.cells[row][col] = digit;
    }

    /// # Panics
    /// If `row` or `col` is 9 or more.
    #[inline]
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == 0
    }

    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&d| d != 0).count()
    }

    /// True when no digit repeats within any row, column or box.
    pub fn is_consistent(&self) -> bool {
        units().all(|unit| {
            let mut seen = [false; SIZE + 1];
            unit.into_iter().all(|(r, c)| {
                let d = self.cells[r][c] as usize;
                if d == 0 {
                    return true;
                }
                !std::mem::replace(&mut seen[d], true)
            })
        })
    }

    /// True when every cell is filled and every unit holds 1-9 exactly once.
    pub fn is_complete_and_valid(&self) -> bool {
        self.filled_count() == SIZE * SIZE && self.is_consistent()
    }
}

type Unit = [(usize, usize); SIZE];

/// All 27 units (rows, columns, boxes) as lists of cell coordinates.
fn units() -> impl Iterator<Item = Unit> {
    let rows = (0..SIZE).map(|r| -> Unit { std::array::from_fn(|i| (r, i)) });
    let cols = (0..SIZE).map(|c| -> Unit { std::array::from_fn(|i| (i, c)) });
    let boxes = (0..SIZE).map(|b| -> Unit {
        let (br, bc) = (BOX * (b / BOX), BOX * (b % BOX));
        std::array::from_fn(|i| (br + i / BOX, bc + i % BOX))
    });
    rows.chain(cols).chain(boxes)
}

impl FromStr for Grid {
    type Err = InputError;

    /// Parse 81 cells in row-major order. `0` or `.` is empty; whitespace
    /// and `|`/`-`/`+` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && !matches!(ch, '|' | '-' | '+'))
            .collect();
        if symbols.len() != SIZE * SIZE {
            return Err(InputError::Parse {
                what: "sudoku grid",
                detail: format!("expected 81 cells, found {}", symbols.len()),
            });
        }
        let mut cells = [[0u8; SIZE]; SIZE];
        for (idx, ch) in symbols.into_iter().enumerate() {
            let digit = match ch {
                '.' => 0,
                _ => ch.to_digit(10).ok_or_else(|| InputError::Parse {
                    what: "sudoku grid",
                    detail: format!("unexpected symbol '{ch}' at cell {idx}"),
                })? as u8,
            };
            cells[idx / SIZE][idx % SIZE] = digit;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 && r % BOX == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (c, &d) in row.iter().enumerate() {
                if c > 0 && c % BOX == 0 {
                    write!(f, "| ")?;
                }
                if d == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{d}")?;
                }
                if c + 1 < SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flat: String = self
            .cells
            .iter()
            .flatten()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.debug_tuple("Grid").field(&flat).finish()
    }
}
