use rand::Rng;

use crate::{utils::positions, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub fn alive() -> Self {
        Self { alive: true }
    }

    pub fn dead() -> Self {
        Self { alive: false }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self { alive }
    }
}

/// A fixed-size field of cells holding exactly one generation.
///
/// Reads outside of `[0, width) x [0, height)` see dead cells and writes
/// there are ignored, so neighbor scans never have to clip by themselves.
pub trait World: Clone + Send + 'static {
    fn with_size(width: usize, height: usize) -> Self;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, pos: Pos) -> Cell;
    fn set(&mut self, pos: Pos, cell: Cell);

    /// live neighbors of `pos`, implementations may memoize.
    fn neighbor_count(&mut self, pos: Pos) -> u8 {
        self.scan_neighbors(pos)
    }

    /// live neighbors of `pos`, always computed from the cells.
    fn scan_neighbors(&self, pos: Pos) -> u8 {
        pos.neighbors()
            .filter(|&neighbor| self.get(neighbor).is_alive())
            .count() as u8
    }

    fn actives(&self) -> Vec<Pos> {
        positions(self.width(), self.height())
            .filter(|&pos| self.get(pos).is_alive())
            .collect()
    }

    /// revives about a third of the cells and kills the rest.
    fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng,
    {
        for pos in positions(self.width(), self.height()) {
            self.set(pos, Cell::from(rng.gen_ratio(1, 3)));
        }
    }
}

pub use cached_grid::CachedGrid;
mod cached_grid;

pub use grid::Grid;
mod grid;
