//! Mask blur and majority re-vote
//!
//! Splits the grid into per-biome binary masks, Gaussian-blurs each, and
//! re-votes every cell for the strongest mask. Clusters regions and softens
//! the raw threshold boundaries from classification.

use crate::biomes::{Biome, BiomeGrid};
use crate::grid::Grid;

const KERNEL_SIZE: usize = 3;
const SIGMA: f64 = 1.0;

/// Build a normalized Gaussian kernel of the given odd size.
fn gaussian_kernel(size: usize, sigma: f64) -> Vec<Vec<f64>> {
    let center = (size / 2) as f64;
    let mut kernel = vec![vec![0.0; size]; size];
    let mut sum = 0.0;
    for (y, row) in kernel.iter_mut().enumerate() {
        for (x, value) in row.iter_mut().enumerate() {
            let dist2 = (x as f64 - center).powi(2) + (y as f64 - center).powi(2);
            *value = (-dist2 / (2.0 * sigma * sigma)).exp();
            sum += *value;
        }
    }
    for row in kernel.iter_mut() {
        for value in row.iter_mut() {
            *value /= sum;
        }
    }
    kernel
}

/// Convolve a field with a normalized Gaussian kernel.
///
/// Edge cells renormalize over the in-bounds portion of the kernel, so a
/// constant field stays constant all the way to the border.
pub fn gaussian_blur(field: &Grid<f64>, kernel_size: usize) -> Grid<f64> {
    let size = field.size();
    let kernel = gaussian_kernel(kernel_size, SIGMA);
    let half = (kernel_size / 2) as i64;
    let mut blurred = Grid::new_with(size, 0.0);

    for y in 0..size {
        for x in 0..size {
            let mut acc = 0.0;
            let mut weight_sum = 0.0;
            for ky in -half..=half {
                for kx in -half..=half {
                    let nx = x as i64 + kx;
                    let ny = y as i64 + ky;
                    if field.in_bounds(nx, ny) {
                        let w = kernel[(ky + half) as usize][(kx + half) as usize];
                        weight_sum += w;
                        acc += field.get(nx as usize, ny as usize) * w;
                    }
                }
            }
            blurred.set(x, y, acc / weight_sum);
        }
    }
    blurred
}

/// Blur the per-biome masks and re-vote every cell.
///
/// Ties go to the earlier entry in the priority order plains, desert,
/// ocean. Village cells pass through untouched; no settlements exist at
/// this pipeline stage yet, the branch is kept in case the pass order ever
/// changes.
pub fn smooth(grid: BiomeGrid) -> BiomeGrid {
    let size = grid.size();

    let mut ocean_mask = Grid::new_with(size, 0.0);
    let mut desert_mask = Grid::new_with(size, 0.0);
    let mut plains_mask = Grid::new_with(size, 0.0);
    let mut village_mask = Grid::new_with(size, 0.0);

    for (x, y, &biome) in grid.iter() {
        let mask = match biome {
            Biome::Ocean => &mut ocean_mask,
            Biome::Desert => &mut desert_mask,
            Biome::Plains => &mut plains_mask,
            Biome::Village => &mut village_mask,
        };
        mask.set(x, y, 1.0);
    }

    let blurred_ocean = gaussian_blur(&ocean_mask, KERNEL_SIZE);
    let blurred_desert = gaussian_blur(&desert_mask, KERNEL_SIZE);
    let blurred_plains = gaussian_blur(&plains_mask, KERNEL_SIZE);

    let mut smoothed = Grid::new_with(size, Biome::Plains);
    for y in 0..size {
        for x in 0..size {
            if *village_mask.get(x, y) == 1.0 {
                smoothed.set(x, y, Biome::Village);
                continue;
            }

            let mut winner = Biome::Plains;
            let mut best = *blurred_plains.get(x, y);
            for (biome, value) in [
                (Biome::Desert, *blurred_desert.get(x, y)),
                (Biome::Ocean, *blurred_ocean.get(x, y)),
            ] {
                if value > best {
                    winner = biome;
                    best = value;
                }
            }
            smoothed.set(x, y, winner);
        }
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_normalized() {
        let kernel = gaussian_kernel(3, 1.0);
        let sum: f64 = kernel.iter().flatten().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_blur_preserves_constant_field() {
        let field = Grid::new_with(6, 5.0);
        let blurred = gaussian_blur(&field, 3);
        for (x, y, &v) in blurred.iter() {
            // Edge renormalization keeps borders at full value too.
            assert!((v - 5.0).abs() < 1e-12, "cell ({}, {}) drifted to {}", x, y, v);
        }
    }

    #[test]
    fn test_blur_spreads_an_impulse() {
        let mut field = Grid::new_with(5, 0.0);
        field.set(2, 2, 1.0);
        let blurred = gaussian_blur(&field, 3);
        assert!(*blurred.get(2, 2) > *blurred.get(1, 2));
        assert!(*blurred.get(1, 2) > 0.0);
        assert_eq!(*blurred.get(0, 0), 0.0);
    }

    #[test]
    fn test_uniform_grid_is_unchanged() {
        for &biome in &[Biome::Ocean, Biome::Desert, Biome::Plains] {
            let grid = BiomeGrid::new_with(8, biome);
            let smoothed = smooth(grid.clone());
            assert_eq!(smoothed, grid);
        }
    }

    #[test]
    fn test_isolated_cell_is_absorbed() {
        let mut grid = BiomeGrid::new_with(7, Biome::Plains);
        grid.set(3, 3, Biome::Desert);
        let smoothed = smooth(grid);
        assert_eq!(*smoothed.get(3, 3), Biome::Plains);
    }

    #[test]
    fn test_village_cells_pass_through() {
        let mut grid = BiomeGrid::new_with(7, Biome::Ocean);
        grid.set(2, 5, Biome::Village);
        let smoothed = smooth(grid);
        assert_eq!(*smoothed.get(2, 5), Biome::Village);
        assert_eq!(*smoothed.get(0, 0), Biome::Ocean);
    }

    #[test]
    fn test_solid_regions_keep_their_interior() {
        // Left half ocean, right half desert on a 10x10 grid.
        let mut grid = BiomeGrid::new_with(10, Biome::Desert);
        for y in 0..10 {
            for x in 0..5 {
                grid.set(x, y, Biome::Ocean);
            }
        }
        let smoothed = smooth(grid);
        assert_eq!(*smoothed.get(1, 5), Biome::Ocean);
        assert_eq!(*smoothed.get(8, 5), Biome::Desert);
    }
}
