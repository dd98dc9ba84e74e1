//! Map generation orchestration
//!
//! One `generate` call runs the full pipeline against a private random
//! stream: elevation/aridity fields, threshold classification, mask
//! smoothing, ocean stitching, ratio correction, settlement growth. Every
//! stage draws from the same stream in a fixed order, so output is
//! bit-identical for a given seed, size and ratio set. The pipeline is not
//! preemptible for the same reason; a run is one atomic unit.

use rand::Rng;

use crate::biomes::{BiomeGrid, BiomeRatios};
use crate::classify;
use crate::connectivity;
use crate::correction;
use crate::elevation;
use crate::error::GeneratorError;
use crate::rng::SeededRandom;
use crate::smoothing;
use crate::villages;

/// Deterministic biome-map generator for a fixed seed, size and ratio set.
#[derive(Debug)]
pub struct MapGenerator {
    seed: i64,
    size: usize,
    ratios: BiomeRatios,
}

impl MapGenerator {
    /// Configure a generator. Fails fast on a degenerate size; ratio values
    /// are taken as-is (skewed inputs skew the output, they never crash it).
    pub fn new(seed: i64, size: usize, ratios: BiomeRatios) -> Result<Self, GeneratorError> {
        if size == 0 {
            return Err(GeneratorError::InvalidSize(size));
        }
        Ok(Self { seed, size, ratios })
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Run the full pipeline. Owns a fresh generator and scratch structures
    /// per call, so repeat calls return identical grids.
    pub fn generate(&self) -> BiomeGrid {
        let mut rng = SeededRandom::new(self.seed);

        let fields = elevation::generate_fields(self.size, &mut rng);
        let grid = classify::classify(&fields, &self.ratios);
        let grid = smoothing::smooth(grid);
        let grid = connectivity::connect_oceans(grid, &mut rng);
        let grid = correction::enforce_ocean_ratio(grid, self.ratios.ocean, &mut rng);
        villages::place_settlements(grid, self.ratios.village_fraction(), &mut rng)
    }
}

/// Fresh 10-digit seed from system randomness, for callers that want a new
/// map rather than a reproducible one.
pub fn generate_random_seed() -> String {
    rand::thread_rng()
        .gen_range(1_000_000_000i64..10_000_000_000)
        .to_string()
}
