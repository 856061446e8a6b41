use alloc::format;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::Coord;

/// Grid value marking a mined cell.
pub const MINE: i8 = -1;

/// One grid position: a fixed coordinate and value plus the mutable
/// cover/flag state. Values are `-1` for a mine, `0` for an empty cell, and
/// `1..=8` for the number of mined 8-neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    column: Coord,
    row: Coord,
    value: i8,
    covered: bool,
    flagged: bool,
}

impl Cell {
    pub(crate) const fn new(column: Coord, row: Coord, value: i8) -> Self {
        Self {
            column,
            row,
            value,
            covered: true,
            flagged: false,
        }
    }

    pub const fn column(&self) -> Coord {
        self.column
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn value(&self) -> i8 {
        self.value
    }

    pub const fn is_covered(&self) -> bool {
        self.covered
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_mine(&self) -> bool {
        self.value == MINE
    }

    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub(crate) fn uncover(&mut self) {
        self.covered = false;
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }

    /// Accessible label for the cell, e.g. `"Flag, B7"`. Covered cells read
    /// as `"Water"` unless flagged; uncovered cells read as `"Mine"`,
    /// `"Empty"`, or their adjacency count.
    pub fn textual_description(&self) -> String {
        let state = if !self.covered {
            match self.value {
                MINE => "Mine".to_string(),
                0 => "Empty".to_string(),
                count => count.to_string(),
            }
        } else if self.flagged {
            "Flag".to_string()
        } else {
            "Water".to_string()
        };

        format!("{}, {}", state, Self::coordinate_label(self.column, self.row))
    }

    /// Single glyph for visual rendering.
    pub fn graphical_description(&self) -> char {
        if !self.covered {
            match self.value {
                MINE => 'O',
                0 => ' ',
                count => (b'0' + count as u8) as char,
            }
        } else if self.flagged {
            'X'
        } else {
            '~'
        }
    }

    /// Spreadsheet-style coordinate label: column 0 is `A`, row 0 is `1`.
    /// Only defined for columns below 26, which bounds the practical board
    /// width.
    pub fn coordinate_label(column: Coord, row: Coord) -> String {
        let letter = (b'A' + column) as char;
        format!("{letter}{}", u32::from(row) + 1)
    }
}
