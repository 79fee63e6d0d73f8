//! Capability traits for boards and AI players.
//!
//! Boards implement `GameBoard` to define:
//! - How moves modify the board
//! - Which moves are legal
//! - Win and draw conditions
//!
//! AI-capable boards additionally implement `AiPlayer`.

pub mod engine;

pub use engine::{AiPlayer, GameBoard, Status};
