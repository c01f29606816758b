#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

/// offsets of the moore neighborhood, the center excluded.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(0, -1),
    pos!(1, -1),
    pos!(-1, 0),
    pos!(1, 0),
    pos!(-1, 1),
    pos!(0, 1),
    pos!(1, 1),
];

impl Pos {
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(pos!(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// the up to 8 surrounding positions, unclipped; offsets leaving the
    /// `i32` range are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }

    /// the position itself followed by its neighbors.
    pub fn neighborhood(self) -> impl Iterator<Item = Pos> {
        std::iter::once(self).chain(self.neighbors())
    }
}

/// every position of a `width` x `height` rectangle, row by row.
pub fn positions(width: usize, height: usize) -> impl Iterator<Item = Pos> {
    (0..height as i32).flat_map(move |y| (0..width as i32).map(move |x| pos!(x, y)))
}
