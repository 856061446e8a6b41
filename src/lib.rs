#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions and mine budget, as supplied by the caller.
///
/// The engine performs no range validation beyond mine-placement feasibility;
/// the hosting UI is expected to keep `width`/`height` within 8..=26 and
/// `mines` within `1..=width*height - 9`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Cell the mine exclusion zone is anchored on.
    pub const fn center(&self) -> Coord2 {
        ((self.width - 1) / 2, (self.height - 1) / 2)
    }

    /// Number of cells a mine may legally occupy: a cell qualifies only when
    /// both its column and row lie more than one step from the center, which
    /// restricts mines to the four quadrants outside the three-wide center
    /// cross.
    pub fn eligible_mine_cells(&self) -> CellCount {
        let (center_column, center_row) = self.center();
        let columns = (0..self.width)
            .filter(|column| column.abs_diff(center_column) > 1)
            .count() as CellCount;
        let rows = (0..self.height)
            .filter(|row| row.abs_diff(center_row) > 1)
            .count() as CellCount;
        columns * rows
    }
}

/// Outcome of a single `uncover` call, consumed by the presentation layer to
/// drive its continue / victory-dialog / explosion-dialog transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    Ok,
    Victory,
    Explosion,
    InvalidMove,
}

impl MoveResult {
    /// The round is over and no further moves are accepted as meaningful.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Explosion)
    }

    pub const fn has_update(self) -> bool {
        !matches!(self, Self::InvalidMove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_floored_midpoint() {
        assert_eq!(BoardConfig::new(9, 9, 10).center(), (4, 4));
        assert_eq!(BoardConfig::new(8, 8, 10).center(), (3, 3));
        assert_eq!(BoardConfig::new(26, 8, 10).center(), (12, 3));
    }

    #[test]
    fn eligible_cells_exclude_the_center_cross() {
        // 9x9: three columns and three rows around (4, 4) are off limits.
        assert_eq!(BoardConfig::new(9, 9, 10).eligible_mine_cells(), 36);
        // center near the left edge still blocks three columns
        assert_eq!(BoardConfig::new(8, 8, 10).eligible_mine_cells(), 25);
    }

    #[test]
    fn move_result_predicates() {
        assert!(MoveResult::Victory.is_terminal());
        assert!(MoveResult::Explosion.is_terminal());
        assert!(!MoveResult::Ok.is_terminal());
        assert!(!MoveResult::InvalidMove.has_update());
        assert!(MoveResult::Ok.has_update());
    }
}
