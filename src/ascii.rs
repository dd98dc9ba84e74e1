//! ASCII preview of a finished biome grid
//!
//! One character per cell, for quick terminal inspection. Raster rendering
//! proper lives with external collaborators.

use crate::biomes::{Biome, BiomeGrid};

/// Terminal character for a biome.
pub fn biome_char(biome: Biome) -> char {
    match biome {
        Biome::Ocean => '~',
        Biome::Desert => ':',
        Biome::Plains => '.',
        Biome::Village => '#',
    }
}

/// Render the whole grid as one string, one row per line.
pub fn render_grid(grid: &BiomeGrid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            out.push(biome_char(*grid.get(x, y)));
        }
        out.push('\n');
    }
    out
}
