//! Coordinates and line directions on an N-dimensional board.
//!
//! ## Coordinate
//!
//! A coordinate holds one index per axis. Axis 0 is the gravity axis:
//! pieces dropped into a column settle at the highest free index along it.
//!
//! ## Reduced coordinate
//!
//! A coordinate with axis 0 removed. It names a column, and is the key
//! of the legal-move table since the axis-0 index of a move is always
//! computed by the gravity rule, never chosen.
//!
//! ## Direction
//!
//! A vector in `{-1, 0, 1}^d`, never all zero. Only one vector of each
//! `(v, -v)` pair is stored; scans walk both ways.

use smallvec::SmallVec;

/// A full board coordinate. Four inline axes cover every preset board.
pub type Coord = SmallVec<[usize; 4]>;

/// A coordinate without its gravity axis.
pub type ReducedCoord = SmallVec<[usize; 4]>;

/// A unit line direction.
pub type Direction = SmallVec<[i8; 4]>;

/// Drop the gravity axis from a coordinate.
///
/// ```
/// use connectx::core::coord::{reduce, Coord};
///
/// let mv: Coord = Coord::from_slice(&[5, 3]);
/// assert_eq!(reduce(&mv).as_slice(), &[3]);
/// ```
#[must_use]
pub fn reduce(coord: &[usize]) -> ReducedCoord {
    ReducedCoord::from_slice(&coord[1..])
}

/// Rebuild a full coordinate from a reduced coordinate and a row on axis 0.
#[must_use]
pub fn expand(reduced: &[usize], row: usize) -> Coord {
    let mut coord = Coord::with_capacity(reduced.len() + 1);
    coord.push(row);
    coord.extend_from_slice(reduced);
    coord
}

/// Negate a direction.
#[must_use]
pub fn negate(direction: &[i8]) -> Direction {
    direction.iter().map(|&d| -d).collect()
}

/// Step one cell from `coord` along `direction` (scaled by `sign`).
///
/// Returns `None` if the step leaves the board described by `extents`.
///
/// ```
/// use connectx::core::coord::{step, Coord};
///
/// let extents = [6, 7];
/// let at: Coord = Coord::from_slice(&[5, 0]);
/// assert_eq!(step(&at, &[1, 0], 1, &extents), None);
/// assert_eq!(step(&at, &[1, 0], -1, &extents).unwrap().as_slice(), &[4, 0]);
/// ```
#[must_use]
pub fn step(coord: &[usize], direction: &[i8], sign: i8, extents: &[usize]) -> Option<Coord> {
    debug_assert_eq!(coord.len(), direction.len());
    let mut next = Coord::with_capacity(coord.len());
    for ((&c, &d), &extent) in coord.iter().zip(direction).zip(extents) {
        let moved = c as isize + (d * sign) as isize;
        if moved < 0 || moved >= extent as isize {
            return None;
        }
        next.push(moved as usize);
    }
    Some(next)
}

/// Enumerate the canonical half of all nonzero `{-1, 0, 1}^d` vectors.
///
/// Vectors are produced depth-first over the axes with increments tried
/// in the order `1, 0, -1`, and generation stops once `(3^d - 1) / 2`
/// vectors exist. That prefix ends just before the all-zero vector, so
/// it never contains both a vector and its negation.
///
/// Panics if `3^dimensions` overflows `usize`. Board configurations are
/// capped at `MAX_DIMENSIONS` axes well below that.
#[must_use]
pub fn canonical_directions(dimensions: usize) -> Vec<Direction> {
    let total = u32::try_from(dimensions)
        .ok()
        .and_then(|d| 3usize.checked_pow(d))
        .unwrap_or_else(|| panic!("{dimensions} axes have too many line directions"));
    let limit = (total - 1) / 2;
    let mut out = Vec::with_capacity(limit);
    let mut current: Direction = smallvec::smallvec![0; dimensions];
    generate_directions(limit, &mut current, 0, &mut out);
    out
}

/// Returns `true` once the limit is reached so callers unwind.
fn generate_directions(
    limit: usize,
    current: &mut Direction,
    axis: usize,
    out: &mut Vec<Direction>,
) -> bool {
    if out.len() >= limit {
        return true;
    }
    if axis == current.len() {
        out.push(current.clone());
        return false;
    }
    for increment in [1i8, 0, -1] {
        current[axis] = increment;
        if generate_directions(limit, current, axis + 1, out) {
            return true;
        }
    }
    false
}
