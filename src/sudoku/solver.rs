//! Depth-first backtracking search over a Sudoku grid.
//!
//! Cells are visited in row-major order. Pre-filled cells are skipped; an
//! empty cell tries digits 1-9 ascending, places the first one that
//! [`is_valid`] accepts, recurses, and retracts the digit if the recursion
//! fails. Every frame clears its own placement before reporting failure, so
//! an unsolvable grid comes back exactly as it went in.
//!
//! A grid whose clues already conflict (a digit repeated within a row, column
//! or box) can never be completed, but proving that by search alone takes
//! exponential time. Such grids are rejected up front with no steps emitted.
//!
//! There is no constraint propagation: this is plain brute force, which is
//! what makes the search worth watching.

use super::grid::{Grid, BOX, SIZE};
use crate::trace::{StepTrace, SudokuAction, SudokuStep};

/// Whether `num` may legally occupy `(row, col)`.
///
/// Checks the row, the column and the containing box for an existing `num`.
/// The cell itself is not excluded, so callers ask about empty cells.
pub fn is_valid(grid: &Grid, row: usize, col: usize, num: u8) -> bool {
    let (br, bc) = (BOX * (row / BOX), BOX * (col / BOX));
    (0..SIZE).all(|x| {
        grid.get(row, x) != num
            && grid.get(x, col) != num
            && grid.get(br + x / BOX, bc + x % BOX) != num
    })
}

/// Solve in place. Returns `false` (with `grid` unchanged) if no solution exists.
pub fn solve(grid: &mut Grid) -> bool {
    solve_with(grid, |_: SudokuStep| {})
}

/// Result of an animated solve.
#[derive(Debug, Clone)]
pub struct AnimatedSolve {
    pub solved: bool,
    /// Every placement and retraction, dead ends included.
    pub trace: StepTrace,
}

/// Solve in place, recording every placement and retraction as a step.
pub fn solve_animated(grid: &mut Grid) -> AnimatedSolve {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("sudoku_solve", clues = grid.filled_count());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut trace = StepTrace::new();
    let solved = solve_with(grid, |step| trace.push(step));

    #[cfg(feature = "tracing")]
    tracing::debug!(solved, steps = trace.len(), "sudoku search finished");

    AnimatedSolve { solved, trace }
}

/// Solve in place, streaming each placement and retraction to `on_step` as
/// it happens.
pub fn solve_with<F>(grid: &mut Grid, mut on_step: F) -> bool
where
    F: FnMut(SudokuStep),
{
    if !grid.is_consistent() {
        #[cfg(feature = "tracing")]
        tracing::debug!("sudoku clues conflict; skipping search");
        return false;
    }
    search(grid, 0, &mut on_step)
}

/// Recursive search from flat cell index `pos` (row-major, 81 = past the end).
fn search<F>(grid: &mut Grid, pos: usize, on_step: &mut F) -> bool
where
    F: FnMut(SudokuStep),
{
    if pos == SIZE * SIZE {
        return true;
    }
    let (row, col) = (pos / SIZE, pos % SIZE);
    if !grid.is_empty_cell(row, col) {
        return search(grid, pos + 1, on_step);
    }

    for num in 1..=SIZE as u8 {
        if !is_valid(grid, row, col, num) {
            continue;
        }
        grid.put(row, col, num);
        on_step(SudokuStep {
            row,
            col,
            action: SudokuAction::Place(num),
        });

        if search(grid, pos + 1, on_step) {
            return true;
        }

        grid.put(row, col, 0);
        on_step(SudokuStep {
            row,
            col,
            action: SudokuAction::Retract(num),
        });
    }
    false
}
