//! Legal-move bookkeeping under the gravity rule.
//!
//! The table maps every column that still has room (a reduced
//! coordinate) to its resting row: the axis-0 index the next piece
//! dropped there settles at. Columns fill from the highest axis-0 index
//! down to 0. A column's entry disappears when it fills and comes back
//! when a move there is undone.
//!
//! The map is ordered so that move enumeration is deterministic.

use std::collections::BTreeMap;

use crate::core::coord::{expand, Coord, ReducedCoord};

/// Mapping from reduced coordinate to resting row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LegalMoveTable {
    rows: BTreeMap<ReducedCoord, usize>,
    drop_extent: usize,
}

impl LegalMoveTable {
    /// Table for an empty board with the given axis extents.
    #[must_use]
    pub fn new(extents: &[usize]) -> Self {
        let drop_extent = extents[0];
        let mut rows = BTreeMap::new();

        let lateral = &extents[1..];
        let mut column: ReducedCoord = smallvec::smallvec![0; lateral.len()];
        'columns: loop {
            rows.insert(column.clone(), drop_extent - 1);

            // Odometer increment over the lateral axes, last axis fastest.
            for axis in (0..lateral.len()).rev() {
                column[axis] += 1;
                if column[axis] < lateral[axis] {
                    continue 'columns;
                }
                column[axis] = 0;
            }
            break;
        }

        Self { rows, drop_extent }
    }

    /// Resting row of a column, or `None` if the column is full.
    #[must_use]
    pub fn resting_row(&self, column: &[usize]) -> Option<usize> {
        self.rows.get(column).copied()
    }

    /// Number of columns with room left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether every column is full.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over (column, resting row) in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&ReducedCoord, usize)> {
        self.rows.iter().map(|(column, &row)| (column, row))
    }

    /// Record a piece dropped into `column`.
    pub fn occupy(&mut self, column: &[usize]) {
        let row = self
            .rows
            .get_mut(column)
            .unwrap_or_else(|| panic!("column {column:?} is already full"));
        if *row > 0 {
            *row -= 1;
        } else {
            self.rows.remove(column);
        }
    }

    /// Record a piece taken back from `column`.
    pub fn release(&mut self, column: &[usize]) {
        match self.rows.get_mut(column) {
            None => {
                self.rows.insert(ReducedCoord::from_slice(column), 0);
            }
            Some(row) if *row + 1 < self.drop_extent => *row += 1,
            Some(_) => {
                self.rows.remove(column);
            }
        }
    }

    /// Synthesize every legal move, in canonical search order.
    #[must_use]
    pub fn moves(&self) -> Vec<Coord> {
        let mut moves: Vec<Coord> = self
            .rows
            .iter()
            .map(|(column, &row)| expand(column, row))
            .collect();
        canonical_order(&mut moves);
        moves
    }
}

/// Reorder moves from table order into canonical search order.
///
/// With `n` moves and `z = n / 2 - 1`, a cursor `m` runs over `1..=n`;
/// for every `m >= z` with `m < n`, the element at `m - 1` is swapped
/// with the element at a second index `i` that starts at 0 and advances
/// after each swap. For seven columns this yields `[1, 2, 3, 4, 5, 0, 6]`.
/// Search move ordering and the iterative-deepening hint depend on this
/// exact permutation.
pub fn canonical_order<T>(moves: &mut [T]) {
    let n = moves.len() as isize;
    let threshold = n / 2 - 1;
    let mut i = 0usize;
    for m in 1..=n {
        if m >= threshold && m < n && (i as isize) < n {
            moves.swap(m as usize - 1, i);
            i += 1;
        }
    }
}
