//! Example: animated Sudoku search on a random puzzle.
//!
//! Run with:
//! `cargo run --example sudoku`

use rand::{rngs::StdRng, SeedableRng};
use stepviz::sudoku;
use stepviz::trace::SudokuAction;
use stepviz::Step;

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut grid = sudoku::generate_random_sudoku(&mut rng);
    println!("Puzzle ({} clues):\n{grid}", grid.filled_count());

    let run = sudoku::solve_animated(&mut grid);
    let retractions = run
        .trace
        .iter()
        .filter(|s| matches!(s, Step::Sudoku(s) if matches!(s.action, SudokuAction::Retract(_))))
        .count();

    println!(
        "{} events recorded ({} placements, {retractions} retractions)",
        run.trace.len(),
        run.trace.len() - retractions
    );
    if run.solved {
        println!("Solution:\n{grid}");
    } else {
        println!("No solution.");
    }
}
