/*! Seeded random sampling.

Draws a without-replacement subset of a candidate pool. The seed lives in
the [Sampler] itself rather than in process-wide RNG state, and a fresh
generator is built for every draw: given an identical pool (same elements,
same order), the same seed always yields the same selection in the same
order, independently of what was sampled before.
!*/
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default seed, matching the historical sampling runs.
pub const DEFAULT_SEED: u64 = 42;

pub struct Sampler {
    seed: u64,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Get the sampler's seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws `min(count, pool.len())` elements uniformly, without
    /// replacement. An empty pool yields an empty sample.
    pub fn sample<T: Clone>(&self, pool: &[T], count: usize) -> Vec<T> {
        let amount = count.min(pool.len());
        if amount == 0 {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        rand::seq::index::sample(&mut rng, pool.len(), amount)
            .iter()
            .map(|idx| pool[idx].clone())
            .collect()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
