//! Longest Common Subsequence (LCS) length as a step-traced tabulation.
//!
//! `dp[i][j]` is the LCS length of `s[0..i]` and `t[0..j]`. Row 0 and column
//! 0 are base cases (zero) and are not traced; the interior is filled
//! row-major with one step per cell.
//!
//! Symbols compare by exact equality (`PartialEq`), so byte strings, `char`
//! sequences or token slices all work. Only the length table is produced;
//! the subsequence itself is not reconstructed.

use crate::table::Table;
use crate::trace::{LcsRule, LcsStep, StepTrace};
use crate::traits::Tabulation;

#[derive(Clone, Debug)]
pub struct LcsProblem<'a, T = u8> {
    pub s: &'a [T],
    pub t: &'a [T],
}

impl<'a, T: PartialEq> LcsProblem<'a, T> {
    pub fn new(s: &'a [T], t: &'a [T]) -> Self {
        Self { s, t }
    }

    fn m(&self) -> usize {
        self.s.len()
    }

    fn n(&self) -> usize {
        self.t.len()
    }
}

impl<'a, T: PartialEq> Tabulation for LcsProblem<'a, T> {
    type Value = u32;

    fn shape(&self) -> (usize, usize) {
        (self.m() + 1, self.n() + 1)
    }

    fn init_table(&self) -> Table<u32> {
        Table::filled(self.m() + 1, self.n() + 1, 0)
    }

    fn fill(&self, dp: &mut Table<u32>, trace: &mut StepTrace) {
        for i in 1..=self.m() {
            for j in 1..=self.n() {
                let (value, rule) = if self.s[i - 1] == self.t[j - 1] {
                    let diagonal = dp[(i - 1, j - 1)];
                    (diagonal + 1, LcsRule::Match { diagonal })
                } else {
                    let up = dp[(i - 1, j)];
                    let left = dp[(i, j - 1)];
                    (up.max(left), LcsRule::Skip { up, left })
                };
                dp[(i, j)] = value;
                trace.push(LcsStep {
                    row: i,
                    col: j,
                    value,
                    rule,
                });
            }
        }
    }

    fn answer(&self, dp: &Table<u32>) -> u32 {
        dp[(self.m(), self.n())]
    }

    fn step_count(&self) -> usize {
        self.m() * self.n()
    }
}

/// Compute the last DP row of LCS(x, y) in two rolling rows.
///
/// Returns a vector `row` of length |y|+1, where row[j] = LCS(x, y[0..j]).
/// Used as an untraced reference for the full table.
pub fn lcs_last_row<T: PartialEq>(x: &[T], y: &[T]) -> Vec<u32> {
    let m = y.len();
    let mut prev = vec![0u32; m + 1];
    let mut curr = vec![0u32; m + 1];

    for cx in x {
        for j in 1..=m {
            let up = prev[j];
            let left = curr[j - 1];
            let diag = prev[j - 1] + u32::from(*cx == y[j - 1]);
            curr[j] = up.max(left).max(diag);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Step;
    use crate::TraceEngine;

    #[test]
    fn last_row_basic_cases() {
        assert_eq!(lcs_last_row(b"", b""), vec![0]);
        assert_eq!(lcs_last_row(b"A", b""), vec![0]);
        assert_eq!(lcs_last_row(b"", b"A"), vec![0, 0]);
        assert_eq!(lcs_last_row(b"A", b"A"), vec![0, 1]);
        assert_eq!(lcs_last_row(b"A", b"B"), vec![0, 0]);
    }

    #[test]
    fn textbook_pair() {
        let sol = TraceEngine::new(LcsProblem::new(b"ABCBDAB", b"BDCABA")).run();
        assert_eq!(sol.answer, 4);
        assert_eq!(sol.table.row(7), lcs_last_row(b"ABCBDAB", b"BDCABA").as_slice());
    }

    #[test]
    fn edge_cases_empty_and_identical() {
        let sol = TraceEngine::new(LcsProblem::new(b"", b"ABC")).run();
        assert_eq!(sol.answer, 0);
        assert!(sol.trace.is_empty());

        let s = b"HELLO";
        let sol = TraceEngine::new(LcsProblem::new(s, s)).run();
        assert_eq!(sol.answer, s.len() as u32);
    }

    #[test]
    fn no_case_folding() {
        let sol = TraceEngine::new(LcsProblem::new(b"abc", b"ABC")).run();
        assert_eq!(sol.answer, 0);
    }

    #[test]
    fn works_over_chars() {
        let a: Vec<char> = "naïve".chars().collect();
        let b: Vec<char> = "native".chars().collect();
        let sol = TraceEngine::new(LcsProblem::new(&a, &b)).run();
        assert_eq!(sol.answer, 4);
    }

    #[test]
    fn match_steps_record_diagonal() {
        let sol = TraceEngine::new(LcsProblem::new(b"AB", b"AB")).run();
        let rules: Vec<LcsRule> = sol
            .trace
            .iter()
            .map(|s| match s {
                Step::Lcs(l) => l.rule,
                other => panic!("unexpected step {other:?}"),
            })
            .collect();
        assert_eq!(
            rules,
            vec![
                LcsRule::Match { diagonal: 0 },
                LcsRule::Skip { up: 0, left: 1 },
                LcsRule::Skip { up: 1, left: 0 },
                LcsRule::Match { diagonal: 1 },
            ]
        );
    }
}
