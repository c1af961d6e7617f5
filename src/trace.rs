//! Step records and the append-only step trace.
//!
//! Every engine in this crate records each cell update as one [`Step`], in the
//! exact order it computes them. A [`StepTrace`] can only be extended from
//! inside the crate; once an engine hands it out it is read-only, which makes
//! it safe to pass to a playback consumer as-is.
//!
//! [`Step`] is a tagged union keyed by algorithm so that presenters can match
//! exhaustively on the provenance each variant carries.

use std::fmt;
use std::ops::Index;

/// One recorded computation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Knapsack(KnapsackStep),
    Lcs(LcsStep),
    MatrixChain(MatrixChainStep),
    Sudoku(SudokuStep),
}

impl Step {
    /// The `(row, col)` cell this step touches.
    pub fn cell(&self) -> (usize, usize) {
        match self {
            Step::Knapsack(s) => (s.item, s.capacity),
            Step::Lcs(s) => (s.row, s.col),
            Step::MatrixChain(s) => (s.row, s.col),
            Step::Sudoku(s) => (s.row, s.col),
        }
    }

    /// The value the cell displays after this step.
    ///
    /// Sudoku retractions display `0` (empty).
    pub fn shown_value(&self) -> u64 {
        match self {
            Step::Knapsack(s) => s.value,
            Step::Lcs(s) => u64::from(s.value),
            Step::MatrixChain(s) => s.best,
            Step::Sudoku(s) => match s.action {
                SudokuAction::Place(d) => u64::from(d),
                SudokuAction::Retract(_) => 0,
            },
        }
    }
}

/// Knapsack cell `dp[item][capacity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackStep {
    /// Row index `i`: number of items considered.
    pub item: usize,
    /// Column index `c`: capacity budget.
    pub capacity: usize,
    /// Resulting cell value.
    pub value: u64,
    pub decision: KnapsackDecision,
}

/// Which branch of the knapsack recurrence produced the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnapsackDecision {
    /// Item `i-1` is heavier than the budget; the value is copied from the row above.
    TooHeavy,
    /// Both candidates were compared and the larger one kept.
    Compared { include: u64, exclude: u64 },
}

/// LCS cell `dp[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcsStep {
    pub row: usize,
    pub col: usize,
    pub value: u32,
    pub rule: LcsRule,
}

/// Which branch of the LCS recurrence produced the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcsRule {
    /// Symbols matched; value is `diagonal + 1`.
    Match { diagonal: u32 },
    /// Symbols differ; value is `max(up, left)`.
    Skip { up: u32, left: u32 },
}

/// One split candidate `k` evaluated for matrix-chain cell `dp[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixChainStep {
    pub row: usize,
    pub col: usize,
    /// Split point `k` in `[row, col)`.
    pub split: usize,
    /// `dp[row][k]`.
    pub left: u64,
    /// `dp[k+1][col]`.
    pub right: u64,
    /// `d[row] * d[k+1] * d[col+1]`.
    pub multiply: u64,
    /// `left + right + multiply`.
    pub candidate: u64,
    /// Running minimum of the cell after this candidate.
    pub best: u64,
}

/// One Sudoku placement or retraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SudokuStep {
    pub row: usize,
    pub col: usize,
    pub action: SudokuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SudokuAction {
    Place(u8),
    Retract(u8),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Knapsack(s) => fmt::Display::fmt(s, f),
            Step::Lcs(s) => fmt::Display::fmt(s, f),
            Step::MatrixChain(s) => fmt::Display::fmt(s, f),
            Step::Sudoku(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl fmt::Display for KnapsackStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, c) = (self.item, self.capacity);
        match self.decision {
            KnapsackDecision::TooHeavy => {
                write!(f, "dp[{i}][{c}] = dp[{}][{c}] = {}", i - 1, self.value)
            }
            KnapsackDecision::Compared { include, exclude } => write!(
                f,
                "dp[{i}][{c}] = max({include}, {exclude}) = {}",
                self.value
            ),
        }
    }
}

impl fmt::Display for LcsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j) = (self.row, self.col);
        match self.rule {
            LcsRule::Match { diagonal } => write!(
                f,
                "dp[{i}][{j}] = dp[{}][{}] + 1 = {diagonal} + 1 = {}",
                i - 1,
                j - 1,
                self.value
            ),
            LcsRule::Skip { up, left } => {
                write!(f, "dp[{i}][{j}] = max({up}, {left}) = {}", self.value)
            }
        }
    }
}

impl fmt::Display for MatrixChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dp[{}][{}] via k={}: {} + {} + {} = {}; best = {}",
            self.row,
            self.col,
            self.split,
            self.left,
            self.right,
            self.multiply,
            self.candidate,
            self.best
        )
    }
}

impl fmt::Display for SudokuStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            SudokuAction::Place(d) => write!(f, "place {d} at ({}, {})", self.row, self.col),
            SudokuAction::Retract(d) => write!(f, "retract {d} from ({}, {})", self.row, self.col),
        }
    }
}

/// Ordered, append-only log of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    /// `(row, col)` of every step, in trace order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        self.steps.iter().map(Step::cell).collect()
    }
}

impl Index<usize> for StepTrace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<KnapsackStep> for Step {
    fn from(s: KnapsackStep) -> Self {
        Step::Knapsack(s)
    }
}

impl From<LcsStep> for Step {
    fn from(s: LcsStep) -> Self {
        Step::Lcs(s)
    }
}

impl From<MatrixChainStep> for Step {
    fn from(s: MatrixChainStep) -> Self {
        Step::MatrixChain(s)
    }
}

impl From<SudokuStep> for Step {
    fn from(s: SudokuStep) -> Self {
        Step::Sudoku(s)
    }
}
