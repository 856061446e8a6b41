use ndarray::Array2;

use crate::types::nd;
use crate::{BoardConfig, Coord2, GameError, MINE, Result, neighbors};

pub use random::*;

mod random;

/// Produces the value grid for a new board: `-1` per mine, adjacency counts
/// everywhere else. Indexed `(column, row)`.
pub trait MinefieldGenerator {
    fn generate(self, config: BoardConfig) -> Result<Array2<i8>>;
}

/// Places mines at fixed coordinates, deriving adjacency counts the same way
/// random generation does. Intended for tests and replayable layouts; it
/// applies no exclusion zone.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedMinefieldGenerator<'a> {
    pub const fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator<'_> {
    fn generate(self, config: BoardConfig) -> Result<Array2<i8>> {
        let bounds = (config.width, config.height);
        let mut values = Array2::zeros([config.width as usize, config.height as usize]);

        for &coords in self.mines {
            if coords.0 >= config.width || coords.1 >= config.height {
                return Err(GameError::InvalidCoords);
            }
            if values[nd(coords)] != MINE {
                place_mine(&mut values, coords, bounds);
            }
        }

        Ok(values)
    }
}

/// Marks `coords` as a mine and bumps the count of every in-bounds neighbor
/// that is not itself a mine.
pub(crate) fn place_mine(values: &mut Array2<i8>, coords: Coord2, bounds: Coord2) {
    values[nd(coords)] = MINE;
    for pos in neighbors(coords, bounds) {
        let neighbor = &mut values[nd(pos)];
        if *neighbor != MINE {
            *neighbor += 1;
        }
    }
}
