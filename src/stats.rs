//! Per-biome coverage statistics

use std::collections::BTreeMap;

use crate::biomes::{Biome, BiomeGrid};

/// Percentage of the grid covered by each biome, formatted to one decimal.
///
/// All four biomes are always present in the result. An empty grid yields
/// an empty map rather than dividing by zero.
pub fn biome_percentages(grid: &BiomeGrid) -> BTreeMap<Biome, String> {
    let total = grid.len();
    if total == 0 {
        return BTreeMap::new();
    }

    let mut counts: BTreeMap<Biome, usize> = Biome::all().iter().map(|&b| (b, 0)).collect();
    for (_, _, &biome) in grid.iter() {
        *counts.entry(biome).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(biome, count)| {
            let pct = count as f64 / total as f64 * 100.0;
            (biome, format!("{pct:.1}"))
        })
        .collect()
}
