//! Biome categories and target area ratios

use std::collections::HashMap;

use crate::grid::Grid;

/// A generated biome map.
pub type BiomeGrid = Grid<Biome>;

/// The four fixed terrain categories a cell can hold.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Biome {
    Ocean,
    Desert,
    #[default]
    Plains,
    Village,
}

impl Biome {
    pub fn all() -> &'static [Biome] {
        &[Biome::Ocean, Biome::Desert, Biome::Plains, Biome::Village]
    }

    /// Stable small-integer code, for collaborators that want a compact
    /// 2D array representation of the grid.
    pub fn key(self) -> u8 {
        match self {
            Biome::Ocean => 0,
            Biome::Desert => 1,
            Biome::Plains => 2,
            Biome::Village => 3,
        }
    }

    pub fn from_key(key: u8) -> Option<Biome> {
        match key {
            0 => Some(Biome::Ocean),
            1 => Some(Biome::Desert),
            2 => Some(Biome::Plains),
            3 => Some(Biome::Village),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Biome::Ocean => "Ocean",
            Biome::Desert => "Desert",
            Biome::Plains => "Plains",
            Biome::Village => "Village",
        }
    }

    /// Display color as a hex string, for the rendering collaborator.
    pub fn color(&self) -> &'static str {
        match self {
            Biome::Ocean => "#0066BB",
            Biome::Desert => "#DDCC88",
            Biome::Plains => "#669944",
            Biome::Village => "#FF6347",
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Biome::Ocean => write!(f, "ocean"),
            Biome::Desert => write!(f, "desert"),
            Biome::Plains => write!(f, "plains"),
            Biome::Village => write!(f, "village"),
        }
    }
}

/// Target share of the grid, in percent, for each directly assigned biome.
///
/// Plains is the residual and carries no target of its own. Values are
/// taken as-is: malformed ratios (sums over 100, out-of-range entries)
/// skew the output but never crash the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeRatios {
    pub ocean: f64,
    pub desert: f64,
    pub village: f64,
}

impl BiomeRatios {
    pub fn new(ocean: f64, desert: f64, village: f64) -> Self {
        Self {
            ocean,
            desert,
            village,
        }
    }

    /// Build from a caller-supplied map; missing keys count as 0 and a
    /// Plains entry is ignored (it is the residual).
    pub fn from_map(map: &HashMap<Biome, f64>) -> Self {
        Self {
            ocean: map.get(&Biome::Ocean).copied().unwrap_or(0.0),
            desert: map.get(&Biome::Desert).copied().unwrap_or(0.0),
            village: map.get(&Biome::Village).copied().unwrap_or(0.0),
        }
    }

    pub fn ocean_fraction(&self) -> f64 {
        self.ocean / 100.0
    }

    pub fn desert_fraction(&self) -> f64 {
        self.desert / 100.0
    }

    pub fn village_fraction(&self) -> f64 {
        self.village / 100.0
    }
}

impl Default for BiomeRatios {
    fn default() -> Self {
        Self {
            ocean: 30.0,
            desert: 20.0,
            village: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for &biome in Biome::all() {
            assert_eq!(Biome::from_key(biome.key()), Some(biome));
        }
        assert_eq!(Biome::from_key(4), None);
    }

    #[test]
    fn test_from_map_tolerates_missing_keys() {
        let mut map = HashMap::new();
        map.insert(Biome::Ocean, 40.0);
        let ratios = BiomeRatios::from_map(&map);
        assert_eq!(ratios.ocean, 40.0);
        assert_eq!(ratios.desert, 0.0);
        assert_eq!(ratios.village, 0.0);
    }

    #[test]
    fn test_plains_entry_is_ignored() {
        let mut map = HashMap::new();
        map.insert(Biome::Plains, 90.0);
        map.insert(Biome::Village, 5.0);
        let ratios = BiomeRatios::from_map(&map);
        assert_eq!(ratios.ocean, 0.0);
        assert_eq!(ratios.village, 5.0);
    }

    #[test]
    fn test_fractions() {
        let ratios = BiomeRatios::new(30.0, 20.0, 5.0);
        assert_eq!(ratios.ocean_fraction(), 0.3);
        assert_eq!(ratios.desert_fraction(), 0.2);
        assert_eq!(ratios.village_fraction(), 0.05);
    }
}
