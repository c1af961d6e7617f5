//! Backtracking Sudoku solver with a traced (animated) mode.
//!
//! Unlike the tabulation problems, the search is not a table fill: it places
//! and retracts digits, and the animated mode records both kinds of event so
//! that dead ends are visible during playback.

pub mod generate;
pub mod grid;
pub mod solver;

pub use self::generate::{generate_random_sudoku, generate_with_clues, DEFAULT_CLUES};
pub use self::grid::Grid;
pub use self::solver::{is_valid, solve, solve_animated, solve_with, AnimatedSolve};
