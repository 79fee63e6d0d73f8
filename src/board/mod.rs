//! The connect-K board engine.
//!
//! A `Board` stores piece identifiers in a `DenseGrid`, keeps the
//! legal-move table current on every move and undo, and detects wins
//! along every canonical direction through the last placed piece.
//!
//! Supports any number of dimensions (2D, 3D, 4D, ...), any number of
//! players, and any win threshold above 2.

mod board;
pub mod legal;

pub use board::Board;
pub use legal::{canonical_order, LegalMoveTable};
