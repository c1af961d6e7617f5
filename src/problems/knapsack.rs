//! 0/1 knapsack as a step-traced tabulation.
//!
//! Classic DP:
//! - Items `0..n` with weight `w[i]` and value `v[i]`, integer capacity `C`.
//! - `dp[i][c]` is the best value using the first `i` items under budget `c`.
//!
//! Row 0 is the base case (all zeros) and is not traced. Rows `1..=n` are
//! filled row-major, capacity `0..=C` within each row, one step per cell.
//! Value sums saturate at `u64::MAX`.

use crate::error::InputError;
use crate::table::Table;
use crate::trace::{KnapsackDecision, KnapsackStep, StepTrace};
use crate::traits::Tabulation;

/// 0/1 knapsack instance.
#[derive(Clone, Debug)]
pub struct KnapsackProblem {
    weights: Vec<usize>,
    values: Vec<u64>,
    capacity: usize,
}

impl KnapsackProblem {
    /// Build an instance; `weights` and `values` must have equal length.
    pub fn new(weights: Vec<usize>, values: Vec<u64>, capacity: usize) -> Result<Self, InputError> {
        if weights.len() != values.len() {
            return Err(InputError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn n(&self) -> usize {
        self.weights.len()
    }
}

impl Tabulation for KnapsackProblem {
    type Value = u64;

    fn shape(&self) -> (usize, usize) {
        (self.n() + 1, self.capacity + 1)
    }

    fn init_table(&self) -> Table<u64> {
        Table::filled(self.n() + 1, self.capacity + 1, 0)
    }

    fn fill(&self, dp: &mut Table<u64>, trace: &mut StepTrace) {
        for i in 1..=self.n() {
            let w = self.weights[i - 1];
            let v = self.values[i - 1];
            for c in 0..=self.capacity {
                let exclude = dp[(i - 1, c)];
                let (value, decision) = if w > c {
                    (exclude, KnapsackDecision::TooHeavy)
                } else {
                    let include = dp[(i - 1, c - w)].saturating_add(v);
                    (include.max(exclude), KnapsackDecision::Compared { include, exclude })
                };
                dp[(i, c)] = value;
                trace.push(KnapsackStep {
                    item: i,
                    capacity: c,
                    value,
                    decision,
                });
            }
        }
    }

    fn answer(&self, dp: &Table<u64>) -> u64 {
        dp[(self.n(), self.capacity)]
    }

    fn step_count(&self) -> usize {
        self.n() * (self.capacity + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Step;
    use crate::TraceEngine;

    fn solve(weights: Vec<usize>, values: Vec<u64>, capacity: usize) -> crate::Solution<u64> {
        let problem = KnapsackProblem::new(weights, values, capacity).unwrap();
        TraceEngine::new(problem).run()
    }

    #[test]
    fn textbook_instance() {
        let sol = solve(vec![1, 3, 4, 5], vec![1, 4, 5, 7], 7);
        assert_eq!(sol.answer, 9);
        assert_eq!(sol.table[(4, 7)], 9);
        assert_eq!(sol.trace.len(), 4 * 8);
    }

    #[test]
    fn zero_capacity_is_all_zero() {
        let sol = solve(vec![2, 3], vec![10, 20], 0);
        assert_eq!(sol.answer, 0);
        assert!(sol.table.iter_rows().all(|r| r == [0]));
        assert!(sol.trace.iter().all(|s| matches!(
            s,
            Step::Knapsack(KnapsackStep {
                decision: KnapsackDecision::TooHeavy,
                ..
            })
        )));
    }

    #[test]
    fn huge_values_saturate() {
        let sol = solve(vec![1, 1], vec![u64::MAX, 1], 2);
        assert_eq!(sol.answer, u64::MAX);
        assert_eq!(sol.table.row(1), &[0, u64::MAX, u64::MAX]);
        assert_eq!(
            sol.trace[sol.trace.len() - 1],
            Step::Knapsack(KnapsackStep {
                item: 2,
                capacity: 2,
                value: u64::MAX,
                decision: KnapsackDecision::Compared {
                    include: u64::MAX,
                    exclude: u64::MAX,
                },
            })
        );
    }

    #[test]
    fn no_items_collapses_to_zero_row() {
        let sol = solve(Vec::new(), Vec::new(), 5);
        assert_eq!(sol.answer, 0);
        assert_eq!(sol.table.rows(), 1);
        assert!(sol.trace.is_empty());
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = KnapsackProblem::new(vec![1, 2], vec![3], 4).unwrap_err();
        assert_eq!(
            err,
            InputError::LengthMismatch {
                weights: 2,
                values: 1
            }
        );
    }

    #[test]
    fn compared_steps_carry_both_candidates() {
        let sol = solve(vec![2], vec![3], 3);
        let decisions: Vec<_> = sol
            .trace
            .iter()
            .map(|s| match s {
                Step::Knapsack(k) => k.decision,
                other => panic!("unexpected step {other:?}"),
            })
            .collect();
        assert_eq!(
            decisions,
            vec![
                KnapsackDecision::TooHeavy,
                KnapsackDecision::TooHeavy,
                KnapsackDecision::Compared {
                    include: 3,
                    exclude: 0
                },
                KnapsackDecision::Compared {
                    include: 3,
                    exclude: 0
                },
            ]
        );
    }
}
