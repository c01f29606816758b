use crate::{Cell, Pos, World};

/// Row-major bounded grid without any memoization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::dead(); width * height],
        }
    }

    /// linear index of `pos`, `None` when out of bounds.
    pub fn index(&self, pos: Pos) -> Option<usize> {
        index_of(self.width, self.height, pos)
    }

    /// writes `cell` and tells whether the stored state actually changed.
    pub fn replace(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(index) if self.cells[index] != cell => {
                self.cells[index] = cell;
                true
            }
            _ => false,
        }
    }
}

pub fn index_of(width: usize, height: usize, Pos { x, y }: Pos) -> Option<usize> {
    let in_bounds = x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height;
    in_bounds.then(|| y as usize * width + x as usize)
}

impl World for Grid {
    fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, pos: Pos) -> Cell {
        match self.index(pos) {
            Some(index) => self.cells[index],
            None => Cell::dead(),
        }
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        self.replace(pos, cell);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::pos;

    #[test]
    fn starts_dead() {
        let grid = Grid::new(4, 3);
        assert!(grid.actives().is_empty());
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(pos!(0, 0)), Some(0));
        assert_eq!(grid.index(pos!(3, 0)), Some(3));
        assert_eq!(grid.index(pos!(1, 2)), Some(9));
        assert_eq!(grid.index(pos!(4, 0)), None);
        assert_eq!(grid.index(pos!(0, -1)), None);
    }

    #[test]
    fn replace_reports_changes() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.replace(pos!(1, 1), Cell::alive()));
        assert!(!grid.replace(pos!(1, 1), Cell::alive()));
        assert!(!grid.replace(pos!(5, 1), Cell::alive()));
        assert!(grid.replace(pos!(1, 1), Cell::dead()));
    }

    #[test]
    fn edges_count_fewer_neighbors() {
        let mut grid = Grid::new(3, 3);
        for pos in crate::utils::positions(3, 3) {
            grid.set(pos, Cell::alive());
        }
        assert_eq!(grid.scan_neighbors(pos!(1, 1)), 8);
        assert_eq!(grid.scan_neighbors(pos!(0, 1)), 5);
        assert_eq!(grid.scan_neighbors(pos!(0, 0)), 3);
        assert_eq!(grid.scan_neighbors(pos!(2, 2)), 3);
    }

    #[test]
    fn extreme_coordinates_are_harmless() {
        let mut grid = Grid::new(3, 3);
        for pos in [pos!(i32::MAX, 0), pos!(i32::MIN, i32::MIN), pos!(0, i32::MAX)] {
            assert_eq!(grid.scan_neighbors(pos), 0);
            grid.set(pos, Cell::alive());
            assert_eq!(grid.get(pos), Cell::dead());
        }
        let mut cached = crate::CachedGrid::new(3, 3);
        cached.set(pos!(i32::MAX, i32::MAX), Cell::alive());
        assert_eq!(cached.neighbor_count(pos!(i32::MAX, i32::MAX)), 0);
    }

    #[test]
    fn empty_dimensions_are_harmless() {
        let mut grid = Grid::new(0, 0);
        grid.set(pos!(0, 0), Cell::alive());
        assert_eq!(grid.get(pos!(0, 0)), Cell::dead());
        assert_eq!(grid.scan_neighbors(pos!(0, 0)), 0);
        assert!(grid.actives().is_empty());
    }

    #[test]
    fn randomize_is_reproducible() {
        let mut a = Grid::new(30, 30);
        let mut b = Grid::new(30, 30);
        a.randomize(&mut StdRng::seed_from_u64(7));
        b.randomize(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        let population = a.actives().len();
        assert!((200..400).contains(&population), "{population}");
    }

    proptest! {
        #[test]
        fn set_then_get_in_bounds(x in 0..20i32, y in 0..10i32, alive: bool) {
            let mut grid = Grid::new(20, 10);
            grid.set(pos!(x, y), Cell::from(alive));
            prop_assert_eq!(grid.get(pos!(x, y)).is_alive(), alive);
        }

        #[test]
        fn out_of_bounds_is_dead(x in -50..50i32, y in -50..50i32) {
            prop_assume!(!(0..20).contains(&x) || !(0..10).contains(&y));
            let mut grid = Grid::new(20, 10);
            grid.set(pos!(x, y), Cell::alive());
            prop_assert!(!grid.get(pos!(x, y)).is_alive());
            prop_assert!(grid.actives().is_empty());
        }
    }
}
