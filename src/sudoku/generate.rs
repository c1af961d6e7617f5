//! Random starting grids.
//!
//! Cells are filled by rejection sampling: draw a uniform `(row, col, digit)`
//! triple and keep it only if the cell is empty and the digit is currently
//! valid there. Each placement is checked individually; the result is not
//! checked for global solvability.

use rand::Rng;

use super::grid::{Grid, SIZE};
use super::solver::is_valid;

/// Number of clues placed by [`generate_random_sudoku`].
pub const DEFAULT_CLUES: usize = 20;

/// Consecutive rejections after which we check that a placement is still possible.
const STALL_CHECK: usize = SIZE * SIZE * SIZE;

/// Random grid with [`DEFAULT_CLUES`] filled cells.
pub fn generate_random_sudoku<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    generate_with_clues(rng, DEFAULT_CLUES)
}

/// Random grid with up to `count` filled cells.
///
/// Stops early, with fewer clues, only if no empty cell admits any digit.
/// That cannot happen for small counts.
pub fn generate_with_clues<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Grid {
    let mut grid = Grid::empty();
    let mut remaining = count.min(SIZE * SIZE);
    let mut rejected = 0usize;

    while remaining > 0 {
        let row = rng.gen_range(0..SIZE);
        let col = rng.gen_range(0..SIZE);
        let num = rng.gen_range(1..=SIZE as u8);
        if grid.is_empty_cell(row, col) && is_valid(&grid, row, col, num) {
            grid.put(row, col, num);
            remaining -= 1;
            rejected = 0;
            continue;
        }
        rejected += 1;
        if rejected >= STALL_CHECK {
            if !any_placement(&grid) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    placed = grid.filled_count(),
                    requested = count,
                    "no valid placement left; returning partial grid"
                );
                break;
            }
            rejected = 0;
        }
    }
    grid
}

fn any_placement(grid: &Grid) -> bool {
    (0..SIZE * SIZE).any(|pos| {
        let (row, col) = (pos / SIZE, pos % SIZE);
        grid.is_empty_cell(row, col) && (1..=SIZE as u8).any(|d| is_valid(grid, row, col, d))
    })
}
