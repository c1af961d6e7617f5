//! Error types for input validation and playback.

use thiserror::Error;

/// Problem input that cannot be turned into a well-formed instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("knapsack has {weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("matrix chain needs at least two dimensions (one matrix)")]
    NoMatrices,

    #[error("sudoku grid must have 9 rows of 9 cells, got {rows} rows")]
    WrongShape { rows: usize },

    #[error("sudoku cell ({row}, {col}) is outside the 9x9 grid")]
    CellOutOfRange { row: usize, col: usize },

    #[error("sudoku cell ({row}, {col}) holds {value}, expected 0-9")]
    DigitOutOfRange { row: usize, col: usize, value: u32 },

    #[error("cannot parse {what}: {detail}")]
    Parse { what: &'static str, detail: String },
}

/// Failure to start a playback run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("a playback run is still in flight with {pending} pending steps")]
    Busy { pending: usize },
}
