//! Elevation and aridity field generation
//!
//! Elevation is biased toward randomly placed ocean centers so seas come out
//! contiguous instead of speckled. Aridity is an independent field sampled at
//! a fixed offset; it later decides where deserts sit.

use crate::grid::Grid;
use crate::noise;
use crate::rng::SeededRandom;

/// A circular region that pulls elevation down toward sea level.
#[derive(Clone, Copy, Debug)]
struct OceanCenter {
    x: f64,
    y: f64,
    radius: f64,
}

/// Both noise fields for one generation run, values in [0, 1].
pub struct TerrainFields {
    pub elevation: Grid<f64>,
    pub aridity: Grid<f64>,
}

/// Sample elevation and aridity for every cell.
///
/// Traversal is rows outer, columns inner, elevation before aridity per
/// cell. The order is part of the determinism contract: every draw lands at
/// a fixed position in the shared stream.
pub fn generate_fields(size: usize, rng: &mut SeededRandom) -> TerrainFields {
    let centers = place_ocean_centers(size, rng);

    let mut elevation = Grid::new_with(size, 0.0);
    let mut aridity = Grid::new_with(size, 0.0);

    for y in 0..size {
        for x in 0..size {
            // Centers are tested in creation order; the probability draw is
            // only consumed inside a center's radius, and the first success
            // short-circuits.
            let in_ocean_zone = centers.iter().any(|center| {
                let dist = ((x as f64 - center.x).powi(2) + (y as f64 - center.y).powi(2)).sqrt();
                dist < center.radius && rng.next() < 0.95 - (dist / center.radius) * 0.7
            });

            let e = if in_ocean_zone {
                // Forced low elevation inside ocean zones.
                rng.next() * 0.4
            } else {
                noise::octave_noise(x as f64, y as f64, rng, 6, 0.5, size as f64 / 8.0)
            };
            elevation.set(x, y, e);

            let a = noise::octave_noise(
                x as f64 + 1000.0,
                y as f64 + 1000.0,
                rng,
                4,
                0.6,
                size as f64 / 6.0,
            );
            aridity.set(x, y, a);
        }
    }

    TerrainFields { elevation, aridity }
}

/// Draw 1-3 ocean centers with uniform position and radius in [0.3, 0.6] x N.
fn place_ocean_centers(size: usize, rng: &mut SeededRandom) -> Vec<OceanCenter> {
    let count = ((rng.next() * 3.0).floor() as usize + 1).clamp(1, 3);
    (0..count)
        .map(|_| OceanCenter {
            x: rng.next() * size as f64,
            y: rng.next() * size as f64,
            radius: (0.3 + rng.next() * 0.3) * size as f64,
        })
        .collect()
}
