#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use stepviz::{problems::lcs::LcsProblem, problems::matrix_chain::MatrixChainProblem, TraceEngine};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_lcs_trace() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 3_000);
    let t = random_dna(&mut rng, 3_000);
    let solution = TraceEngine::new(LcsProblem::new(&s, &t)).run();
    assert!(solution.answer <= 3_000);
    assert_eq!(solution.trace.len(), 3_000 * 3_000);
}

#[test]
fn heavy_stress_matrix_chain_trace() {
    let mut rng = StdRng::seed_from_u64(321);
    let n = 200;
    let dims: Vec<u64> = (0..=n).map(|_| rng.gen_range(1..=500)).collect();
    let solution = TraceEngine::new(MatrixChainProblem::new(dims).unwrap()).run();
    // Σ (n - l + 1)(l - 1) = (n^3 - n) / 6
    assert_eq!(solution.trace.len(), (n * n * n - n) / 6);
}
