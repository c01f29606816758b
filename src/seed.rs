use log::warn;
use thiserror::Error;

use crate::{pos, Cell, Pos, World};

/// The glider, heading south-east.
pub const DEFAULT_CELLS: &str = "[[1,0],[2,1],[0,2],[1,2],[2,2]]";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("live cells must be a JSON array of [x, y] integer pairs: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// parses `[[x1, y1], [x2, y2], ...]`.
pub fn parse_cells(json: &str) -> Result<Vec<[i64; 2]>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Revives every listed cell lying inside `world`; the others are reported
/// and skipped. Returns how many were planted.
pub fn plant<W>(world: &mut W, coords: &[[i64; 2]]) -> usize
where
    W: World,
{
    let (width, height) = (world.width() as i64, world.height() as i64);
    let mut planted = 0;
    for &[x, y] in coords {
        if x < 0 || x >= width || y < 0 || y >= height {
            warn!("cell [{x},{y}] lies outside of the {width}x{height} grid, skipping it");
            continue;
        }
        world.set(pos!(x as i32, y as i32), Cell::alive());
        planted += 1;
    }
    planted
}
