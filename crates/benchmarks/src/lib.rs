//! Benchmark utilities for the drill crates
pub mod utils {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Random integers in `-bound..bound`, reproducible for a given seed.
    pub fn generate_sequence(len: usize, bound: i64, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-bound..bound)).collect()
    }

    /// Distinct even values `0, 2, 4, ...`; no two of them sum to an odd target.
    pub fn generate_pairless_sequence(len: usize) -> Vec<i64> {
        (0..len as i64).map(|i| i * 2).collect()
    }
}
