//! Synchronous trace engine.
//!
//! The engine runs a [`Tabulation`] instance to completion in one call. The
//! finished table and the full step trace are both materialized before
//! anything is handed to playback; the computation never suspends.

use crate::table::Table;
use crate::trace::StepTrace;
use crate::traits::Tabulation;

/// Output of one engine run.
#[derive(Debug, Clone)]
pub struct Solution<V> {
    /// The completed DP table.
    pub table: Table<V>,
    /// Every cell update, in computation order.
    pub trace: StepTrace,
    /// The problem's overall answer read from `table`.
    pub answer: V,
}

/// Step-tracing engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use stepviz::{TraceEngine, problems::lcs::LcsProblem};
///
/// let problem = LcsProblem::new(b"ABCBDAB", b"BDCABA");
/// let solution = TraceEngine::new(problem).run();
/// assert_eq!(solution.answer, 4);
/// assert_eq!(solution.trace.len(), 7 * 6);
/// ```
pub struct TraceEngine<P: Tabulation> {
    problem: P,
}

impl<P: Tabulation> TraceEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Fill the table and record the trace.
    pub fn run(&self) -> Solution<P::Value> {
        #[cfg(feature = "tracing")]
        let span = {
            let (rows, cols) = self.problem.shape();
            tracing::info_span!("trace_run", rows, cols)
        };
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = self.problem.init_table();
        debug_assert_eq!((table.rows(), table.cols()), self.problem.shape());

        let mut trace = StepTrace::with_capacity(self.problem.step_count());
        self.problem.fill(&mut table, &mut trace);
        let answer = self.problem.answer(&table);

        #[cfg(feature = "tracing")]
        tracing::debug!(steps = trace.len(), "tabulation finished");

        Solution {
            table,
            trace,
            answer,
        }
    }

    /// Consume the engine and return the problem instance.
    pub fn into_problem(self) -> P {
        self.problem
    }
}
