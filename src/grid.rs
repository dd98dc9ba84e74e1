//! Dense square grid container
//!
//! Row-major storage, fixed size at construction. Coordinates do not wrap;
//! biome maps have hard edges on all four sides.

/// A square N x N grid of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![T::default(); size * size],
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_with(size: usize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Whether a signed coordinate pair falls inside the grid.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// 8-connected neighbors, clamped at the edges (no wrapping).
    pub fn neighbors_8(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if self.in_bounds(nx, ny) {
                    result.push((nx as usize, ny as usize));
                }
            }
        }
        result
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.size;
            let y = idx / self.size;
            (x, y, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates, row-major.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let size = self.size;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = idx % size;
            let y = idx / size;
            (x, y, val)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid = Grid::new_with(4, 0u8);
        grid.set(2, 3, 9);
        assert_eq!(*grid.get(2, 3), 9);
        assert_eq!(*grid.get(3, 2), 0);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = Grid::new_with(3, 0usize);
        for (x, y, cell) in grid.iter_mut() {
            *cell = y * 10 + x;
        }
        let order: Vec<usize> = grid.iter().map(|(_, _, &v)| v).collect();
        assert_eq!(order, vec![0, 1, 2, 10, 11, 12, 20, 21, 22]);
    }

    #[test]
    fn test_neighbors_8_at_corner_and_center() {
        let grid = Grid::new_with(5, 0u8);
        assert_eq!(grid.neighbors_8(0, 0).len(), 3);
        assert_eq!(grid.neighbors_8(4, 4).len(), 3);
        assert_eq!(grid.neighbors_8(2, 0).len(), 5);
        assert_eq!(grid.neighbors_8(2, 2).len(), 8);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new_with(3, 0u8);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 2));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, 3));
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid<u8> = Grid::new(0);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }
}
