use crate::{Cell, Grid, Pos, World};

use super::grid::index_of;

/// Memoized live-neighbor counts, one slot per cell.
///
/// A slot is only trusted while `valid` is set; any state change inside its
/// moore neighborhood clears it.
#[derive(Debug, Clone)]
struct NeighborCache {
    width: usize,
    height: usize,
    counts: Vec<u8>,
    valid: Vec<bool>,
}

impl NeighborCache {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            counts: vec![0; width * height],
            valid: vec![false; width * height],
        }
    }

    fn get(&self, pos: Pos) -> Option<u8> {
        let index = index_of(self.width, self.height, pos)?;
        self.valid[index].then(|| self.counts[index])
    }

    fn store(&mut self, pos: Pos, count: u8) {
        if let Some(index) = index_of(self.width, self.height, pos) {
            self.counts[index] = count;
            self.valid[index] = true;
        }
    }

    fn invalidate_around(&mut self, pos: Pos) {
        for pos in pos.neighborhood() {
            if let Some(index) = index_of(self.width, self.height, pos) {
                self.valid[index] = false;
            }
        }
    }
}

/// A [`Grid`] remembering neighbor counts between queries and generations.
#[derive(Debug, Clone)]
pub struct CachedGrid {
    grid: Grid,
    cache: NeighborCache,
}

impl CachedGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            cache: NeighborCache::new(width, height),
        }
    }

    /// the memoized count for `pos`, if still valid.
    #[cfg(test)]
    pub fn cached_count(&self, pos: Pos) -> Option<u8> {
        self.cache.get(pos)
    }

    #[cfg(test)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl World for CachedGrid {
    fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height)
    }

    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn get(&self, pos: Pos) -> Cell {
        self.grid.get(pos)
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        if self.grid.replace(pos, cell) {
            self.cache.invalidate_around(pos);
        }
    }

    fn neighbor_count(&mut self, pos: Pos) -> u8 {
        if let Some(count) = self.cache.get(pos) {
            return count;
        }
        let count = self.grid.scan_neighbors(pos);
        self.cache.store(pos, count);
        count
    }
}
