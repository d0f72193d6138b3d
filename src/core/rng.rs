//! Deterministic random number generation.
//!
//! Mine placement and move suggestions are the only sources of randomness in
//! this crate, and both must be reproducible so that tests can pin down a
//! board layout or a whole game with a single seed.
//!
//! ```
//! use puzzle_agents::core::AgentRng;
//!
//! let mut rng = AgentRng::new(42);
//!
//! // Fork for an independent consumer (e.g. the agent vs the board)
//! let mut agent_rng = rng.fork();
//!
//! let from_base: Vec<_> = (0..5).map(|_| rng.gen_range_usize(0..100)).collect();
//! let from_fork: Vec<_> = (0..5).map(|_| agent_rng.gen_range_usize(0..100)).collect();
//! assert_ne!(from_base, from_fork);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8: fast, and the same seed always produces the same sequence.
/// Forks give independent but still deterministic streams, so a board and
/// the agent playing it can share one top-level seed.
#[derive(Clone, Debug)]
pub struct AgentRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl AgentRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
