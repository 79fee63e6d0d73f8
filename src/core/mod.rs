//! Core engine types: coordinates, the dense grid, pieces, configuration, RNG.
//!
//! This module contains the game-agnostic building blocks. Boards are
//! configured via `BoardConfig` rather than by changing the core.

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;

pub use config::{
    BoardConfig, Difficulty, Participant, Variant, DEFAULT_WIN_THRESHOLD, MAX_AI_DEPTH,
    MAX_DIMENSIONS, MIN_AI_DEPTH,
};
pub use coord::{Coord, Direction, ReducedCoord};
pub use error::ConfigError;
pub use grid::DenseGrid;
pub use piece::{PieceId, PieceMap};
pub use rng::GameRng;
