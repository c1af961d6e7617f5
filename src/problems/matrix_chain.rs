//! Matrix-chain multiplication as a step-traced tabulation.
//!
//! Classic DP:
//! - Given dimensions d[0..=n], matrix k has shape d[k] x d[k+1].
//! - `dp[i][j]` is the minimum scalar multiplications for matrices `i..=j`.
//!
//! The table is `n x n` and only its upper triangle is meaningful. The
//! diagonal is the zero-cost base case and is never traced. Cells are filled
//! by increasing chain length, and every split candidate `k` is recorded as
//! its own step, whether or not it improves the running minimum.

use crate::error::InputError;
use crate::table::Table;
use crate::trace::{MatrixChainStep, StepTrace};
use crate::traits::Tabulation;

/// Matrix-chain DP instance.
#[derive(Clone, Debug)]
pub struct MatrixChainProblem {
    /// Dimensions d[0..=n], with n matrices.
    dims: Vec<u64>,
}

impl MatrixChainProblem {
    /// Build an instance from `n + 1` dimensions; `n` must be at least 1.
    pub fn new(dims: Vec<u64>) -> Result<Self, InputError> {
        if dims.len() < 2 {
            return Err(InputError::NoMatrices);
        }
        Ok(Self { dims })
    }

    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    /// Number of matrices in the chain.
    pub fn n(&self) -> usize {
        self.dims.len() - 1
    }
}

impl Tabulation for MatrixChainProblem {
    type Value = u64;

    fn shape(&self) -> (usize, usize) {
        (self.n(), self.n())
    }

    fn init_table(&self) -> Table<u64> {
        Table::filled(self.n(), self.n(), 0)
    }

    fn fill(&self, dp: &mut Table<u64>, trace: &mut StepTrace) {
        let n = self.n();
        let d = &self.dims;

        for len in 2..=n {
            #[cfg(feature = "tracing")]
            tracing::trace!(len, "matrix chain length");
            for i in 0..=(n - len) {
                let j = i + len - 1;
                dp[(i, j)] = u64::MAX;
                for k in i..j {
                    let left = dp[(i, k)];
                    let right = dp[(k + 1, j)];
                    let multiply = d[i].saturating_mul(d[k + 1]).saturating_mul(d[j + 1]);
                    let candidate = left.saturating_add(right).saturating_add(multiply);
                    if candidate < dp[(i, j)] {
                        dp[(i, j)] = candidate;
                    }
                    trace.push(MatrixChainStep {
                        row: i,
                        col: j,
                        split: k,
                        left,
                        right,
                        multiply,
                        candidate,
                        best: dp[(i, j)],
                    });
                }
            }
        }
    }

    fn answer(&self, dp: &Table<u64>) -> u64 {
        dp[(0, self.n() - 1)]
    }

    fn step_count(&self) -> usize {
        let n = self.n();
        (2..=n).map(|len| (n - len + 1) * (len - 1)).sum()
    }
}
