//! Example: Longest Common Subsequence table, step by step.
//!
//! Run with:
//! `cargo run --example lcs`

use stepviz::{problems::lcs::LcsProblem, TraceEngine};

fn main() {
    let s = b"ABCBDAB";
    let t = b"BDCABA";

    let solution = TraceEngine::new(LcsProblem::new(s, t)).run();

    for step in &solution.trace {
        println!("{step}");
    }
    println!("LCS length: {}", solution.answer);

    print!("   ");
    for &c in t {
        print!(" {}", c as char);
    }
    println!();
    for (i, row) in solution.table.iter_rows().enumerate().skip(1) {
        print!(" {} ", s[i - 1] as char);
        for v in &row[1..] {
            print!(" {v}");
        }
        println!();
    }
}
