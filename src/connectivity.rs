//! Ocean connectivity pass
//!
//! Paints randomized land-bridges between sampled ocean fragments so seas
//! read as connected. A plausibility heuristic, not a flood-fill guarantee.

use crate::biomes::{Biome, BiomeGrid};
use crate::rng::SeededRandom;

/// Below this many ocean cells there is nothing worth stitching.
const MIN_OCEAN_CELLS: usize = 5;
const MAX_WAYPOINTS: usize = 10;
const CONVERT_PROBABILITY: f64 = 0.8;

pub fn connect_oceans(mut grid: BiomeGrid, rng: &mut SeededRandom) -> BiomeGrid {
    let mut ocean_cells: Vec<(usize, usize)> = grid
        .iter()
        .filter(|&(_, _, &b)| b == Biome::Ocean)
        .map(|(x, y, _)| (x, y))
        .collect();

    if ocean_cells.len() < MIN_OCEAN_CELLS {
        return grid;
    }

    // Sample distinct waypoints: uniform index, removal without replacement.
    let count = ocean_cells.len().min(MAX_WAYPOINTS);
    let mut waypoints = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = (rng.next() * ocean_cells.len() as f64).floor() as usize;
        waypoints.push(ocean_cells.swap_remove(idx));
    }

    for pair in waypoints.windows(2) {
        let (sx, sy) = pair[0];
        let (ex, ey) = pair[1];
        let dx = ex as f64 - sx as f64;
        let dy = ey as f64 - sy as f64;
        let steps = dx.abs().max(dy.abs()) as i64;

        for step in 0..=steps {
            let t = if steps == 0 {
                0.0
            } else {
                step as f64 / steps as f64
            };
            let x = (sx as f64 + dx * t).round() as i64;
            let y = (sy as f64 + dy * t).round() as i64;
            if !grid.in_bounds(x, y) {
                continue;
            }

            // Widen the bridge by a small random square. One draw per
            // covered cell, village or not, so the stream position never
            // depends on cell contents.
            let spread = 1 + (rng.next() * 2.0).floor() as i64;
            for ny in (y - spread)..=(y + spread) {
                for nx in (x - spread)..=(x + spread) {
                    if !grid.in_bounds(nx, ny) {
                        continue;
                    }
                    if rng.next() < CONVERT_PROBABILITY
                        && *grid.get(nx as usize, ny as usize) != Biome::Village
                    {
                        grid.set(nx as usize, ny as usize, Biome::Ocean);
                    }
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(grid: &BiomeGrid, biome: Biome) -> usize {
        grid.iter().filter(|&(_, _, &b)| b == biome).count()
    }

    #[test]
    fn test_skips_sparse_oceans() {
        let mut grid = BiomeGrid::new_with(10, Biome::Plains);
        grid.set(1, 1, Biome::Ocean);
        grid.set(8, 8, Biome::Ocean);
        let before = grid.clone();
        let mut rng = SeededRandom::new(42);
        let after = connect_oceans(grid, &mut rng);
        assert_eq!(after, before);
    }

    #[test]
    fn test_landless_grid_unchanged() {
        let grid = BiomeGrid::new_with(8, Biome::Plains);
        let before = grid.clone();
        let mut rng = SeededRandom::new(42);
        assert_eq!(connect_oceans(grid, &mut rng), before);
    }

    #[test]
    fn test_villages_are_never_flooded() {
        // Enough ocean to trigger stitching, villages everywhere else.
        let mut grid = BiomeGrid::new_with(10, Biome::Village);
        for x in 0..6 {
            grid.set(x, 0, Biome::Ocean);
        }
        let before = grid.clone();
        let mut rng = SeededRandom::new(1234567890);
        let after = connect_oceans(grid, &mut rng);
        // Bridges may only overwrite non-village land, of which there is none.
        assert_eq!(after, before);
    }

    #[test]
    fn test_ocean_never_shrinks() {
        let mut grid = BiomeGrid::new_with(12, Biome::Plains);
        for &(x, y) in &[(0, 0), (11, 0), (0, 11), (11, 11), (5, 5), (6, 6)] {
            grid.set(x, y, Biome::Ocean);
        }
        let before = count(&grid, Biome::Ocean);
        let mut rng = SeededRandom::new(7);
        let after = connect_oceans(grid, &mut rng);
        assert!(count(&after, Biome::Ocean) >= before);
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let mut grid = BiomeGrid::new_with(12, Biome::Plains);
        for i in 0..8 {
            grid.set(i, i, Biome::Ocean);
        }
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let ra = connect_oceans(grid.clone(), &mut a);
        let rb = connect_oceans(grid, &mut b);
        assert_eq!(ra, rb);
    }
}
