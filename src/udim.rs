/*!
UDIM tiles.

Tile `1001` covers the unit square `[0, 1) x [0, 1)` of uv space. Moving one
unit along `u` adds 1 to the tile number, moving one unit along `v` adds 10.
Only ten columns exist, so valid coordinates satisfy `0 <= u <= 10` and
`v >= 0`. Coordinates outside that range, and polygons whose coordinates land
in more than one tile, have no tile. This is represented as `None`.
*/

use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

use glam::DVec2;

/// UDIM tile identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Udim {
    id: u32,
}

impl Udim {
    /// The first tile, covering the unit square.
    pub const FIRST: Udim = Udim { id: 1001 };

    /// Number of tile columns along `u`.
    pub const COLUMNS: u32 = 10;

    /// Create a tile from its column and row. Returns `None` if the column
    /// is out of range.
    pub fn from_cell(column: u32, row: u32) -> Option<Udim> {
        if column >= Self::COLUMNS {
            return None;
        }
        row.checked_mul(Self::COLUMNS)
            .and_then(|r| r.checked_add(Self::FIRST.id + column))
            .map(|id| Udim { id })
    }

    /// Create a tile from its number. Returns `None` for numbers below 1001.
    pub fn from_id(id: u32) -> Option<Udim> {
        (id >= Self::FIRST.id).then_some(Udim { id })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn column(&self) -> u32 {
        (self.id - Self::FIRST.id) % Self::COLUMNS
    }

    pub fn row(&self) -> u32 {
        (self.id - Self::FIRST.id) / Self::COLUMNS
    }

    /// The uv coordinates of the lower left corner of this tile.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.column() as f64, self.row() as f64)
    }
}

impl Display for Udim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Debug for Udim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Udim({})", self.id)
    }
}

/// The tile containing the uv coordinate `(u, v)`.
///
/// Returns `None` if `u < 0`, `u > 10` or `v < 0`. Note that `u = 10` itself
/// is accepted and lands in the eleventh column, which wraps into the next
/// row, exactly as `1001 + floor(v) * 10 + floor(u)` would have it. `v` is
/// only bounded by the largest tile number a `u32` can hold.
pub fn tile_of(u: f64, v: f64) -> Option<Udim> {
    // Written so that NaN coordinates are rejected too.
    if !(u >= 0.0 && u <= 10.0 && v >= 0.0) {
        return None;
    }
    let column = u.floor() as u32;
    let row = v.floor();
    if row >= ((u32::MAX - Udim::FIRST.id) / Udim::COLUMNS) as f64 {
        return None;
    }
    Some(Udim {
        id: Udim::FIRST.id + row as u32 * Udim::COLUMNS + column,
    })
}

/// Candidate cells along one axis for the coordinate `x`. A coordinate lying
/// exactly on a grid line belongs to the cells on both sides of it.
fn cells(x: f64, limit: u32) -> impl Iterator<Item = u32> {
    let floor = x.floor();
    let below = (floor == x && floor >= 1.0).then(|| floor as u32 - 1);
    std::iter::once(floor as u32)
        .chain(below)
        .filter(move |c| *c < limit)
}

/// The tile shared by all the coordinates.
///
/// A tile is treated as the closed square `[c, c + 1] x [r, r + 1]`, so a
/// polygon that covers a tile edge to edge, such as the unit square, still
/// belongs to that tile. Returns `None` if any coordinate is out of range, if
/// no single tile contains all of the coordinates, or if there are no
/// coordinates. If several tiles contain all the coordinates, which only
/// happens for degenerate input lying on grid lines, the lowest tile wins.
pub fn tile_of_many<I>(coords: I) -> Option<Udim>
where
    I: IntoIterator<Item = DVec2>,
{
    let mut candidates: Option<BTreeSet<Udim>> = None;
    for uv in coords {
        tile_of(uv.x, uv.y)?;
        let row_limit = (u32::MAX - Udim::FIRST.id) / Udim::COLUMNS;
        let tiles: BTreeSet<Udim> = cells(uv.y, row_limit)
            .flat_map(|row| {
                cells(uv.x, Udim::COLUMNS).filter_map(move |col| Udim::from_cell(col, row))
            })
            .collect();
        let current = match candidates.take() {
            Some(prev) => prev.intersection(&tiles).copied().collect(),
            None => tiles,
        };
        if current.is_empty() {
            return None;
        }
        candidates = Some(current);
    }
    candidates.and_then(|c| c.into_iter().next())
}
