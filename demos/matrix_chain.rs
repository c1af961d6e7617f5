//! Example: Matrix-chain multiplication with a full candidate trace.
//!
//! Run with:
//! `cargo run --example matrix_chain`

use stepviz::{problems::matrix_chain::MatrixChainProblem, Step, TraceEngine};

fn main() {
    // Example from CLRS:
    // Matrices A1..A6 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let dims = vec![30, 35, 15, 5, 10, 20, 25];

    let problem = MatrixChainProblem::new(dims).expect("at least one matrix");
    let solution = TraceEngine::new(problem).run();

    println!("Optimal multiplication cost: {}", solution.answer);
    println!("Candidates evaluated: {}", solution.trace.len());
    for step in &solution.trace {
        if let Step::MatrixChain(s) = step {
            let marker = if s.candidate == s.best { "*" } else { " " };
            println!(" {marker} {s}");
        }
    }
}
