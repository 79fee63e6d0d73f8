//! Dense N-dimensional grid storage.
//!
//! Cells live in one flat `Vec<T>`. A coordinate maps to an offset by a
//! mixed-radix sum with axis 0 varying fastest:
//!
//! ```text
//! stride[0] = 1
//! stride[i] = stride[i - 1] * extent[i - 1]
//! offset    = sum(coord[i] * stride[i])
//! ```
//!
//! The grid carries no game semantics; the board engine stores piece
//! identifiers in it and the evaluator stores visited markers.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Flat storage for an N-dimensional array.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DenseGrid<T> {
    extents: Vec<usize>,
    strides: Vec<usize>,
    cells: Vec<T>,
}

impl<T: Clone> DenseGrid<T> {
    /// Create a grid with every cell set to `fill`.
    ///
    /// ```
    /// use connectx::core::DenseGrid;
    ///
    /// let grid = DenseGrid::new(&[6, 7], 0u8);
    /// assert_eq!(grid.capacity(), 42);
    /// assert_eq!(grid.extent(1), 7);
    /// ```
    pub fn new(extents: &[usize], fill: T) -> Self {
        let mut strides = Vec::with_capacity(extents.len());
        let mut capacity = 1usize;
        for &extent in extents {
            strides.push(capacity);
            capacity *= extent;
        }

        Self {
            extents: extents.to_vec(),
            strides,
            cells: vec![fill; capacity],
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> DenseGrid<T> {
    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Extent of one axis.
    #[must_use]
    pub fn extent(&self, axis: usize) -> usize {
        self.extents[axis]
    }

    /// All axis extents, in axis order.
    #[must_use]
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Number of axes.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.extents.len()
    }

    /// Read a cell. The coordinate must be in bounds.
    #[must_use]
    pub fn get(&self, coord: &[usize]) -> &T {
        &self.cells[self.offset(coord)]
    }

    /// Mutable access to a cell. The coordinate must be in bounds.
    pub fn get_mut(&mut self, coord: &[usize]) -> &mut T {
        let offset = self.offset(coord);
        &mut self.cells[offset]
    }

    /// Write a cell. The coordinate must be in bounds.
    pub fn set(&mut self, coord: &[usize], value: T) {
        *self.get_mut(coord) = value;
    }

    /// Coordinates of every cell equal to `value`, in ascending offset order.
    pub fn find<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Coord> + 'a
    where
        T: PartialEq,
    {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| *cell == value)
            .map(move |(offset, _)| self.position(offset))
    }

    /// Map a coordinate to its flat offset.
    #[must_use]
    pub fn offset(&self, coord: &[usize]) -> usize {
        debug_assert_eq!(coord.len(), self.extents.len(), "coordinate rank mismatch");
        debug_assert!(
            coord.iter().zip(&self.extents).all(|(c, e)| c < e),
            "coordinate {coord:?} out of bounds {:?}",
            self.extents
        );
        coord.iter().zip(&self.strides).map(|(c, s)| c * s).sum()
    }

    /// Map a flat offset back to a coordinate.
    ///
    /// Works from the most significant stride down by repeated
    /// division and remainder.
    #[must_use]
    pub fn position(&self, offset: usize) -> Coord {
        let mut coord: Coord = smallvec::smallvec![0; self.strides.len()];
        let mut rest = offset;
        for (axis, &stride) in self.strides.iter().enumerate().rev() {
            coord[axis] = rest / stride;
            rest %= stride;
        }
        coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_axis_zero_fastest() {
        let grid = DenseGrid::new(&[6, 7], 0u8);
        assert_eq!(grid.offset(&[1, 0]), 1);
        assert_eq!(grid.offset(&[0, 1]), 6);
        assert_eq!(grid.offset(&[5, 6]), 41);
    }

    #[test]
    fn test_offset_position_inverse() {
        let grid = DenseGrid::new(&[3, 4, 5], 0u8);
        for offset in 0..grid.capacity() {
            let coord = grid.position(offset);
            assert_eq!(grid.offset(&coord), offset);
        }
    }

    #[test]
    fn test_set_get_fill() {
        let mut grid = DenseGrid::new(&[2, 3], 0i8);
        grid.set(&[1, 2], 7);
        assert_eq!(*grid.get(&[1, 2]), 7);
        assert_eq!(*grid.get(&[0, 2]), 0);

        grid.fill(3);
        assert!(grid.find(&3).count() == 6);
    }

    #[test]
    fn test_find_in_offset_order() {
        let mut grid = DenseGrid::new(&[2, 2], 0u8);
        grid.set(&[1, 1], 9);
        grid.set(&[0, 1], 9);
        grid.set(&[1, 0], 9);

        let found: Vec<Vec<usize>> = grid.find(&9).map(|c| c.to_vec()).collect();
        assert_eq!(found, vec![vec![1, 0], vec![0, 1], vec![1, 1]]);
    }

    #[test]
    fn test_extents() {
        let grid = DenseGrid::new(&[4, 5, 2], false);
        assert_eq!(grid.extents(), &[4, 5, 2]);
        assert_eq!(grid.dimensions(), 3);
        assert_eq!(grid.capacity(), 40);
    }
}
