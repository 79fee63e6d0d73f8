//! Piece identification and per-piece data storage.
//!
//! ## PieceId
//!
//! Non-zero identifier of a player's token. Zero is reserved for empty
//! cells, so a grid of `Option<PieceId>` is one byte per cell.
//!
//! ## PieceMap
//!
//! Per-piece storage in roster order. Rosters are tiny, so lookup is a
//! linear scan over a `Vec`.

use std::num::NonZeroU8;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Identifier of a piece (a player's token), never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(NonZeroU8);

impl PieceId {
    /// Create a piece ID.
    ///
    /// Panics if `id` is zero; zero denotes an empty cell.
    ///
    /// ```
    /// use connectx::core::PieceId;
    ///
    /// let red = PieceId::new(1);
    /// assert_eq!(red.raw(), 1);
    /// assert!(PieceId::try_new(0).is_none());
    /// ```
    #[must_use]
    pub fn new(id: u8) -> Self {
        Self::try_new(id).expect("piece ID 0 is reserved for empty cells")
    }

    /// Create a piece ID, or `None` for the empty value.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        match NonZeroU8::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0.get()
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

/// Per-piece data storage, ordered like the roster it was built from.
///
/// ## Example
///
/// ```
/// use connectx::core::{PieceId, PieceMap};
///
/// let roster = [PieceId::new(2), PieceId::new(1)];
/// let mut depth: PieceMap<u8> = PieceMap::new(&roster, |_| 0);
///
/// depth[PieceId::new(1)] = 4;
/// assert_eq!(depth[PieceId::new(1)], 4);
/// assert_eq!(depth.pieces().collect::<Vec<_>>(), roster);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMap<T> {
    data: Vec<(PieceId, T)>,
}

impl<T> PieceMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(roster: &[PieceId], factory: impl Fn(PieceId) -> T) -> Self {
        assert!(!roster.is_empty(), "Must have at least 1 piece");

        let data = roster.iter().map(|&piece| (piece, factory(piece))).collect();
        Self { data }
    }

    /// Create a map with default values.
    pub fn with_default(roster: &[PieceId]) -> Self
    where
        T: Default,
    {
        Self::new(roster, |_| T::default())
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; maps are built from non-empty rosters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether the piece is part of this map.
    #[must_use]
    pub fn contains(&self, piece: PieceId) -> bool {
        self.data.iter().any(|(p, _)| *p == piece)
    }

    /// Get a reference to a piece's data.
    #[must_use]
    pub fn get(&self, piece: PieceId) -> Option<&T> {
        self.data.iter().find(|(p, _)| *p == piece).map(|(_, v)| v)
    }

    /// Get a mutable reference to a piece's data.
    pub fn get_mut(&mut self, piece: PieceId) -> Option<&mut T> {
        self.data.iter_mut().find(|(p, _)| *p == piece).map(|(_, v)| v)
    }

    /// Iterate over (PieceId, &T) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &T)> {
        self.data.iter().map(|(p, v)| (*p, v))
    }

    /// Iterate over (PieceId, &mut T) pairs in roster order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PieceId, &mut T)> {
        self.data.iter_mut().map(|(p, v)| (*p, v))
    }

    /// Iterate over the pieces in roster order.
    pub fn pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.data.iter().map(|(p, _)| *p)
    }

    /// Iterate over the values in roster order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|(_, v)| v)
    }
}

impl<T> Index<PieceId> for PieceMap<T> {
    type Output = T;

    fn index(&self, piece: PieceId) -> &Self::Output {
        self.get(piece)
            .unwrap_or_else(|| panic!("{piece} is not on the roster"))
    }
}

impl<T> IndexMut<PieceId> for PieceMap<T> {
    fn index_mut(&mut self, piece: PieceId) -> &mut Self::Output {
        self.get_mut(piece)
            .unwrap_or_else(|| panic!("{piece} is not on the roster"))
    }
}
