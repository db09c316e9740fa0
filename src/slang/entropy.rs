//! Random source for the embellishment draws.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of the random decisions taken by
/// [`SlangTransformer::transform_with`](super::SlangTransformer::transform_with).
pub trait Entropy {
    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

/// [`Entropy`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R: Rng> RngEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngEntropy<ThreadRng> {
    /// Thread-local generator; one per calling thread, no shared state.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Entropy for RngEntropy<R> {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chance_extremes() {
        let mut entropy = RngEntropy::new(StdRng::seed_from_u64(7));
        for _ in 0..100 {
            assert!(!entropy.chance(0.0));
            assert!(entropy.chance(1.0));
        }
    }

    #[test]
    fn test_index_in_range() {
        let mut entropy = RngEntropy::new(StdRng::seed_from_u64(7));
        for _ in 0..200 {
            assert!(entropy.index(6) < 6);
        }
        assert_eq!(entropy.index(1), 0);
    }
}
