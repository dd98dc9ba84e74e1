//! Seeded pseudo-random number generation
//!
//! Lehmer / MINSTD multiplicative congruential generator. Every pipeline
//! stage draws from one shared instance, so the draw order is part of the
//! output contract: the same seed always replays the same infinite sequence.

/// 2^31 - 1, prime modulus of the generator.
const MODULUS: i64 = 2_147_483_647;
/// 7^5, primitive root of the modulus.
const MULTIPLIER: i64 = 16_807;

/// Deterministic float/int source seeded from a single integer.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Create a generator, normalizing any integer seed into [1, 2147483646].
    /// Non-positive remainders wrap by adding 2147483646.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the generator and return a float in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Random integer in [min, max], both ends inclusive.
    ///
    /// Carries a slight low-end bias from the float truncation; fine for
    /// terrain decisions, not cryptographic.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next() * (max - min + 1) as f64).floor() as i64 + min
    }

    /// In-place Fisher-Yates shuffle driven by this generator.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next() * (i + 1) as f64).floor() as usize;
            items.swap(i, j);
        }
    }
}
