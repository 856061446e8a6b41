/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(column, row)`.
pub type Coord2 = (Coord, Coord);

/// Widening multiply so a full-size board's cell count cannot wrap.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

pub(crate) const fn nd((column, row): Coord2) -> [usize; 2] {
    [column as usize, row as usize]
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds 8-neighbors of `center` on a `bounds.0` x `bounds.1` grid.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(delta_column, delta_row)| {
        let column = center.0.checked_add_signed(delta_column)?;
        let row = center.1.checked_add_signed(delta_row)?;
        (column < bounds.0 && row < bounds.1).then_some((column, row))
    })
}
