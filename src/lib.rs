//! Step-traced algorithm engines with timed playback.
//!
//! This crate computes classic algorithms while recording every intermediate
//! update as a discrete [`Step`](trace::Step), so a front end can replay the
//! computation at a chosen speed and show *how* the answer was reached.
//!
//! ## Core idea
//! 1. An engine runs synchronously to completion, producing the finished
//!    table (or grid) and an ordered [`StepTrace`].
//! 2. A [`Player`] schedules step `i` at `i * delay` and hands due steps to a
//!    [`Presenter`](playback::Presenter) strictly in trace order.
//! 3. Only one run plays at a time; overlapping starts are rejected or
//!    replace the old run, depending on [`BusyPolicy`](playback::BusyPolicy).
//!
//! ## Quick start
//! ```
//! use std::time::Duration;
//! use stepviz::{PlayerBuilder, TraceEngine, playback::ScheduledStep};
//! use stepviz::problems::knapsack::KnapsackProblem;
//!
//! let problem = KnapsackProblem::new(vec![1, 3, 4, 5], vec![1, 4, 5, 7], 7).unwrap();
//! let solution = TraceEngine::new(problem).run();
//! assert_eq!(solution.answer, 9);
//!
//! let mut player = PlayerBuilder::new().with_speed_ms(50).build();
//! player.start(solution.trace).unwrap();
//! let mut lines = Vec::new();
//! player.tick(Duration::from_millis(100), &mut |s: ScheduledStep<'_>| {
//!     lines.push(s.step.to_string())
//! });
//! assert_eq!(lines.len(), 3);
//! ```
//!
//! ## Built-in algorithms
//! - [`problems::knapsack`]: 0/1 knapsack
//! - [`problems::lcs`]: Longest Common Subsequence length
//! - [`problems::matrix_chain`]: matrix-chain multiplication
//! - [`sudoku`]: brute-force backtracking Sudoku with an animated mode

pub mod builder;
pub mod engine;
pub mod error;
pub mod playback;
pub mod problems;
pub mod sudoku;
pub mod table;
pub mod trace;
pub mod traits;

pub use crate::builder::PlayerBuilder;
pub use crate::engine::{Solution, TraceEngine};
pub use crate::error::{InputError, PlaybackError};
pub use crate::playback::Player;
pub use crate::table::Table;
pub use crate::trace::{Step, StepTrace};
pub use crate::traits::Tabulation;
