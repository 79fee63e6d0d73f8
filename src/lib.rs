//! # connectx
//!
//! An N-dimensional connect-K board engine with an alpha-beta search AI.
//!
//! ## Design Principles
//!
//! 1. **Dimension-Agnostic**: Boards have any number of axes. Axis 0 is
//!    the gravity axis; pieces fall along it to the lowest free cell.
//!
//! 2. **N-Player First**: Rosters hold any number of pieces. Turn order
//!    follows the roster; the search maximizes for one piece against all
//!    the others.
//!
//! 3. **Configuration Over Convention**: Boards are described by a
//!    `BoardConfig` (roster, extents, win threshold). Classic variants are
//!    presets, not special cases.
//!
//! ## Architecture
//!
//! - **Incremental Legality**: A column table tracks where the next piece
//!   in every column lands, updated on each move and undo.
//!
//! - **Capabilities by Delegation**: `GameBoard` is implemented by the
//!   board; the search engine wraps it and adds `AiPlayer`.
//!
//! - **Contract Failures Panic**: Illegal moves and bad configurations are
//!   caller bugs and fail fast. `try_new` constructors return
//!   `ConfigError` for callers that validate user input.
//!
//! ## Modules
//!
//! - `core`: Coordinates, dense grid, piece IDs, configuration, errors, RNG
//! - `rules`: `GameBoard` and `AiPlayer` traits, game status
//! - `board`: The board engine and its legal-move table
//! - `search`: Alpha-beta search, static evaluation, the search engine

pub mod board;
pub mod core;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigError, Coord, DenseGrid, Difficulty, GameRng, Participant, PieceId,
    PieceMap, Variant,
};

pub use crate::rules::{AiPlayer, GameBoard, Status};

pub use crate::board::{Board, LegalMoveTable};

pub use crate::search::{SearchConfig, SearchEngine, SearchStats, TrackedBoard};
