use log::{debug, info};

use crate::{utils::positions, Cell, World};

/// conway's rules, first match wins.
pub fn next_cell(cell: Cell, neighbor_count: u8) -> Cell {
    match (cell.is_alive(), neighbor_count) {
        (true, count) if count < 2 || count > 3 => Cell::dead(), // dies
        (true, _) => Cell::alive(),                              // stays
        (false, 3) => Cell::alive(),                             // becomes alive
        _ => Cell::dead(),                                       // stays dead
    }
}

/// Moves `world` to its next generation and returns how many cells changed.
///
/// Every count is taken from the untouched current generation; the changes
/// are only written back once the whole pass is over.
pub fn advance<W>(world: &mut W) -> usize
where
    W: World,
{
    let mut changes = Vec::new();
    for pos in positions(world.width(), world.height()) {
        let cell = world.get(pos);
        let next = next_cell(cell, world.neighbor_count(pos));
        if next != cell {
            changes.push((pos, next));
        }
    }

    let changed = changes.len();
    for (pos, cell) in changes {
        world.set(pos, cell);
    }
    changed
}

/// The current generation and how many steps led to it.
#[derive(Debug, Clone)]
pub struct Sim<W>
where
    W: World,
{
    world: W,
    generation: u64,
    still: bool,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn new(world: W) -> Self {
        Self {
            world,
            generation: 0,
            still: false,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// whether the last step left every cell unchanged.
    pub fn is_still(&self) -> bool {
        self.still
    }

    pub fn step(&mut self) -> usize {
        let changed = advance(&mut self.world);
        self.generation += 1;
        debug!("generation {}: {changed} cells changed", self.generation);
        let was_still = self.still;
        self.still = changed == 0;
        if self.still && !was_still {
            info!("still life reached at generation {}", self.generation);
        }
        changed
    }
}
