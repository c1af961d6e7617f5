//! Core trait for step-traced tabulation.
//!
//! To run a DP through [`TraceEngine`](crate::engine::TraceEngine), implement
//! [`Tabulation`] for a struct that captures one problem instance (weights,
//! sequences, dimensions, ...).
//!
//! The contract mirrors bottom-up dynamic programming:
//! - the table has fixed dimensions known before the run starts,
//! - base cells are set by [`Tabulation::init_table`] and are not steps,
//! - [`Tabulation::fill`] writes every remaining cell in a fixed traversal
//!   order, appending one step per update, and never reads a cell before it has
//!   been written in the same run,
//! - the final answer is read from the finished table.

use crate::table::Table;
use crate::trace::StepTrace;

/// A fixed tabulation DP instance.
pub trait Tabulation {
    /// Cell type of the DP table.
    type Value: Copy;

    /// Table dimensions `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    /// Allocate the table with base cases already in place.
    fn init_table(&self) -> Table<Self::Value>;

    /// Fill the table by recurrence, appending a step for every update.
    ///
    /// Requirements:
    /// - steps are appended in exactly the order cells are computed,
    /// - must not fail once the instance has been constructed.
    fn fill(&self, table: &mut Table<Self::Value>, trace: &mut StepTrace);

    /// Read the overall answer from a finished table.
    fn answer(&self, table: &Table<Self::Value>) -> Self::Value;

    /// Number of steps [`fill`](Self::fill) will append.
    ///
    /// Used as a capacity hint only; the default of 0 is always acceptable.
    fn step_count(&self) -> usize {
        0
    }
}
