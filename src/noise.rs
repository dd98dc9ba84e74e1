//! Hash-based value noise
//!
//! Not gradient noise: each sample jitters the coordinate with two draws
//! from the shared generator and pushes it through a sine hash. A sample is
//! therefore reproducible only as part of the exact draw sequence, never
//! from the coordinate alone.

use crate::rng::SeededRandom;

/// Single-octave noise value in [0, 1). Consumes exactly two draws.
pub fn value_noise(x: f64, y: f64, rng: &mut SeededRandom, scale: f64) -> f64 {
    let jx = x + rng.next() * 0.2;
    let jy = y + rng.next() * 0.2;
    let hash = (jx * 12.9898 * scale + jy * 78.233 * scale).sin() * 43758.5453;
    hash - hash.floor()
}

/// Fractal accumulation: `octaves` layers of value noise, each at doubled
/// frequency and `persistence`-scaled amplitude, with two random offset
/// draws per layer. Normalized by total amplitude to [0, 1].
pub fn octave_noise(
    x: f64,
    y: f64,
    rng: &mut SeededRandom,
    octaves: u32,
    persistence: f64,
    scale: f64,
) -> f64 {
    debug_assert!(octaves > 0, "octave_noise needs at least one layer");

    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        let offset_x = rng.next() * 1000.0;
        let offset_y = rng.next() * 1000.0;
        total += value_noise(
            (x + offset_x) * frequency / scale,
            (y + offset_y) * frequency / scale,
            rng,
            1.0,
        ) * amplitude;
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= 2.0;
    }

    total / max_value
}
