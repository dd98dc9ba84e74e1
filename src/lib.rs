//! Deterministic overworld biome-map generation
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod biomes;
pub mod classify;
pub mod connectivity;
pub mod correction;
pub mod elevation;
pub mod error;
pub mod generator;
pub mod grid;
pub mod noise;
pub mod rng;
pub mod smoothing;
pub mod stats;
pub mod villages;

pub use biomes::{Biome, BiomeGrid, BiomeRatios};
pub use error::GeneratorError;
pub use generator::{generate_random_seed, MapGenerator};
