//! Settlement placement
//!
//! Grows a handful of compact village clusters on land via randomized
//! breadth-first expansion, then tops up from the remaining candidates when
//! the clusters alone fall short of the target coverage.

use std::collections::{HashMap, VecDeque};

use crate::biomes::{Biome, BiomeGrid};
use crate::rng::SeededRandom;

/// Half-width of the square a cluster seed must keep clear of ocean
/// (7x7 in total).
const SEED_CLEARANCE: i64 = 3;

const DIRECTIONS_8: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Dense candidate pool with O(1) uniform pick and O(1) removal by
/// coordinate. Swap-removal keeps selection uniform without the linear
/// splice a plain list would need.
struct CandidatePool {
    cells: Vec<(usize, usize)>,
    index: HashMap<(usize, usize), usize>,
}

impl CandidatePool {
    fn new(grid: &BiomeGrid) -> Self {
        let cells: Vec<(usize, usize)> = grid
            .iter()
            .filter(|&(_, _, &b)| b == Biome::Plains || b == Biome::Desert)
            .map(|(x, y, _)| (x, y))
            .collect();
        let index = cells.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { cells, index }
    }

    /// Remove and return a uniformly random candidate.
    fn pick(&mut self, rng: &mut SeededRandom) -> Option<(usize, usize)> {
        if self.cells.is_empty() {
            return None;
        }
        let idx = (rng.next() * self.cells.len() as f64).floor() as usize;
        Some(self.remove_at(idx))
    }

    /// Remove a specific coordinate if it is still pooled.
    fn remove(&mut self, cell: (usize, usize)) {
        if let Some(idx) = self.index.get(&cell).copied() {
            self.remove_at(idx);
        }
    }

    fn remove_at(&mut self, idx: usize) -> (usize, usize) {
        let cell = self.cells.swap_remove(idx);
        self.index.remove(&cell);
        if let Some(&moved) = self.cells.get(idx) {
            self.index.insert(moved, idx);
        }
        cell
    }

    /// Consume the pool in random order.
    fn into_shuffled(mut self, rng: &mut SeededRandom) -> Vec<(usize, usize)> {
        rng.shuffle(&mut self.cells);
        self.cells
    }
}

pub fn place_settlements(
    mut grid: BiomeGrid,
    village_ratio: f64,
    rng: &mut SeededRandom,
) -> BiomeGrid {
    let size = grid.size();
    let target = ((size * size) as f64 * village_ratio).floor() as usize;
    if target == 0 {
        return grid;
    }

    let num_clusters = ((village_ratio * 20.0).ceil() as usize).clamp(1, 3);
    let target_cluster_size = target.div_ceil(num_clusters);

    let mut pool = CandidatePool::new(&grid);
    let mut placed = 0;

    for _ in 0..num_clusters {
        if placed >= target {
            break;
        }
        let Some(seed) = pool.pick(rng) else { break };

        // Abandoned seeds stay out of the pool.
        if !clear_of_ocean(&grid, seed) {
            continue;
        }

        grid.set(seed.0, seed.1, Biome::Village);
        placed += 1;

        let mut cluster_size = 1;
        let mut queue = VecDeque::from([seed]);

        'growth: while let Some((cx, cy)) = queue.pop_front() {
            if placed >= target || cluster_size >= target_cluster_size {
                break;
            }

            let mut directions = DIRECTIONS_8;
            rng.shuffle(&mut directions);

            for (dx, dy) in directions {
                let nx = cx as i64 + dx;
                let ny = cy as i64 + dy;
                if !grid.in_bounds(nx, ny) {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let biome = *grid.get(nx, ny);
                if biome != Biome::Plains && biome != Biome::Desert {
                    continue;
                }

                // Acceptance falls off with distance from the seed, which
                // keeps clusters tight.
                let dist = ((nx as f64 - seed.0 as f64).powi(2)
                    + (ny as f64 - seed.1 as f64).powi(2))
                .sqrt();
                let growth_probability = 0.9 - dist / (size as f64 * 0.1);

                if rng.next() < growth_probability {
                    grid.set(nx, ny, Biome::Village);
                    placed += 1;
                    cluster_size += 1;
                    queue.push_back((nx, ny));
                    pool.remove((nx, ny));

                    if placed >= target || cluster_size >= target_cluster_size {
                        break 'growth;
                    }
                }
            }
        }
    }

    // Top-up: when the clusters stall short of the target, scatter the
    // remainder over whatever candidates are left.
    if placed < target {
        for (x, y) in pool.into_shuffled(rng) {
            if placed >= target {
                break;
            }
            grid.set(x, y, Biome::Village);
            placed += 1;
        }
    }

    grid
}

/// A cluster seed needs its full 7x7 neighborhood free of ocean.
fn clear_of_ocean(grid: &BiomeGrid, (sx, sy): (usize, usize)) -> bool {
    for dy in -SEED_CLEARANCE..=SEED_CLEARANCE {
        for dx in -SEED_CLEARANCE..=SEED_CLEARANCE {
            let nx = sx as i64 + dx;
            let ny = sy as i64 + dy;
            if grid.in_bounds(nx, ny) && *grid.get(nx as usize, ny as usize) == Biome::Ocean {
                return false;
            }
        }
    }
    true
}
