use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::nd;
use crate::{
    BoardConfig, Cell, CellCount, Coord, Coord2, MINE, MinefieldGenerator, MoveResult,
    RandomMinefieldGenerator, Result, mult, neighbors,
};

/// The playing field: a rectangular grid of cells indexed `(column, row)`
/// with a fixed mine layout. Only per-cell cover/flag state mutates after
/// construction; a new game constructs a fresh board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: Coord,
    height: Coord,
    mine_count: CellCount,
    flag_count: CellCount,
    grid: Array2<Cell>,
}

impl Board {
    /// Builds a board with mines drawn by the seeded random generator.
    pub fn new(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Self::with_generator(
            BoardConfig::new(width, height, mines),
            RandomMinefieldGenerator::new(seed),
        )
    }

    /// Builds a board from any mine layout source. The mine count is taken
    /// from the generated grid, so it always matches the actual layout.
    pub fn with_generator(config: BoardConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let values = generator.generate(config)?;
        let mine_count = values.iter().filter(|&&value| value == MINE).count() as CellCount;
        let grid = Array2::from_shape_fn(values.raw_dim(), |(column, row)| {
            Cell::new(column as Coord, row as Coord, values[[column, row]])
        });

        Ok(Self {
            width: config.width,
            height: config.height,
            mine_count,
            flag_count: 0,
            grid,
        })
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Flags currently placed. Zero until the first successful `flag` call.
    pub const fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Read-only cell access. Out-of-range coordinates panic; callers are
    /// expected to stay within the board they configured.
    pub fn at(&self, column: Coord, row: Coord) -> &Cell {
        &self.grid[nd((column, row))]
    }

    /// Toggles the flag on a covered cell. Returns false without mutating
    /// anything when the cell is already uncovered.
    pub fn flag(&mut self, column: Coord, row: Coord) -> bool {
        let cell = &mut self.grid[nd((column, row))];
        if !cell.is_covered() {
            return false;
        }
        cell.toggle_flag();

        // flagging is infrequent, so recount instead of maintaining the
        // counter move by move
        self.flag_count = self.grid.iter().filter(|cell| cell.is_flagged()).count() as CellCount;

        true
    }

    /// Reveals a cell and reports the move outcome.
    ///
    /// Uncovered or flagged targets are rejected as `InvalidMove`. Hitting a
    /// mine uncovers the entire board (flags included) and ends the round
    /// with `Explosion`. An empty target flood-fills its zero-valued region;
    /// a numbered target reveals just itself. Both re-evaluate victory.
    pub fn uncover(&mut self, column: Coord, row: Coord) -> MoveResult {
        let cell = self.at(column, row);
        if !cell.is_covered() || cell.is_flagged() {
            return MoveResult::InvalidMove;
        }

        if cell.is_mine() {
            log::debug!("mine hit at ({column}, {row})");
            for cell in self.grid.iter_mut() {
                cell.uncover();
            }
            return MoveResult::Explosion;
        }

        if cell.is_empty() {
            self.flood_uncover((column, row));
        } else {
            self.grid[nd((column, row))].uncover();
        }

        if self.is_won() {
            MoveResult::Victory
        } else {
            MoveResult::Ok
        }
    }

    /// Work-list expansion over the zero-valued region around `seed`,
    /// uncovering its numbered border as well. Only zero cells enter the
    /// stack, so the fill can never reach a mine; flagged cells are left
    /// alone and block expansion through them.
    fn flood_uncover(&mut self, seed: Coord2) {
        let bounds = (self.width, self.height);
        let mut stack = Vec::with_capacity(16);
        stack.push(seed);

        while let Some(coords) = stack.pop() {
            self.grid[nd(coords)].uncover();

            for pos in neighbors(coords, bounds) {
                let neighbor = self.grid[nd(pos)];
                if !neighbor.is_covered() || neighbor.is_flagged() {
                    continue;
                }
                if neighbor.is_empty() {
                    stack.push(pos);
                } else {
                    self.grid[nd(pos)].uncover();
                }
            }
        }
    }

    /// Full-grid victory scan, recomputed after every successful reveal: no
    /// uncovered mine, and every non-mine cell uncovered. O(width x height)
    /// per move, which is fine at the 26x26 ceiling this engine targets.
    fn is_won(&self) -> bool {
        let mut uncovered: CellCount = 0;
        for cell in self.grid.iter() {
            if !cell.is_covered() {
                if cell.is_mine() {
                    return false;
                }
                uncovered += 1;
            }
        }

        uncovered == mult(self.width, self.height) - self.mine_count
    }
}
