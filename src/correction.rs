//! Ocean ratio correction
//!
//! Converts land to ocean until the requested coverage is met, preferring
//! coastline cells so the added water extends existing seas instead of
//! punching inland holes. Running out of candidates leaves a documented
//! shortfall, never an error.

use crate::biomes::{Biome, BiomeGrid};
use crate::rng::SeededRandom;

pub fn enforce_ocean_ratio(
    mut grid: BiomeGrid,
    target_pct: f64,
    rng: &mut SeededRandom,
) -> BiomeGrid {
    let size = grid.size();
    let total = size * size;

    let ocean_count = grid.iter().filter(|&(_, _, &b)| b == Biome::Ocean).count();
    let target_cells = ((total as f64 * target_pct / 100.0).ceil() as usize).min(total);
    if ocean_count >= target_cells {
        return grid;
    }
    let mut deficit = target_cells - ocean_count;

    // Classify candidates against the pre-correction grid.
    let mut edge_cells = Vec::new();
    let mut inland_cells = Vec::new();
    for (x, y, &biome) in grid.iter() {
        if biome == Biome::Ocean || biome == Biome::Village {
            continue;
        }
        if touches_ocean(&grid, x, y) {
            edge_cells.push((x, y));
        } else {
            inland_cells.push((x, y));
        }
    }

    // Coastline first, in random order.
    rng.shuffle(&mut edge_cells);
    for (x, y) in edge_cells {
        if deficit == 0 {
            break;
        }
        grid.set(x, y, Biome::Ocean);
        deficit -= 1;
    }

    if deficit > 0 {
        // Remaining conversions walk inland from the coast, nearest first.
        let mut ranked: Vec<(usize, usize, usize)> = inland_cells
            .into_iter()
            .map(|(x, y)| {
                let d = ring_distance_to_ocean(&grid, x, y);
                (x, y, d)
            })
            .collect();
        ranked.sort_by_key(|&(_, _, d)| d);

        for (x, y, _) in ranked {
            if deficit == 0 {
                break;
            }
            grid.set(x, y, Biome::Ocean);
            deficit -= 1;
        }
    }

    grid
}

/// Whether any 8-neighbor of the cell is ocean.
fn touches_ocean(grid: &BiomeGrid, x: usize, y: usize) -> bool {
    grid.neighbors_8(x, y)
        .into_iter()
        .any(|(nx, ny)| *grid.get(nx, ny) == Biome::Ocean)
}

/// Expanding Manhattan-ring scan to the nearest ocean cell.
///
/// Scans rings of growing radius and stops at the first hit; a grid with no
/// ocean at all reports `usize::MAX`.
fn ring_distance_to_ocean(grid: &BiomeGrid, x: usize, y: usize) -> usize {
    let size = grid.size() as i64;
    for radius in 1..size {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() + dy.abs() != radius {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if grid.in_bounds(nx, ny) && *grid.get(nx as usize, ny as usize) == Biome::Ocean {
                    return radius as usize;
                }
            }
        }
    }
    usize::MAX
}
