//! Utility functions and helpers.

/// Fast xorshift PRNG for non-cryptographic randomness.
///
/// Used by the random selection policy and the problem sampler so that runs
/// are reproducible from a seed.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new PRNG with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: if seed == 0 { 1 } else { seed } }
    }

    /// Generates the next random u64.
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generates a fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        self.next() >> 63 == 1
    }

    /// Generates a uniform index in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next() % bound as u64) as usize
    }

    /// Returns the raw state, e.g. for reproducing a run.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::new(0x2545_F491_4F6C_DD1D)
    }
}
