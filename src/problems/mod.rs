//! Reference tabulation problems for the trace engine.
//!
//! Each module implements [`Tabulation`](crate::traits::Tabulation) for one
//! classic dynamic program:
//! - [`knapsack`]      : 0/1 knapsack, best value under a capacity budget.
//! - [`lcs`]           : Longest Common Subsequence length.
//! - [`matrix_chain`]  : Matrix-chain multiplication, minimum scalar cost.

pub mod knapsack;
pub mod lcs;
pub mod matrix_chain;
