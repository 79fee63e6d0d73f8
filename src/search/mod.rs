//! Alpha-beta search AI for connect-K boards.
//!
//! ## Overview
//!
//! `SearchEngine` wraps a board and adds AI-controlled pieces. Each AI
//! piece has a search depth; asking for its move runs a time-bounded
//! iterative-deepening alpha-beta search over a private copy of the
//! board and scores leaves with a line-pattern evaluator.
//!
//! - **Make/unmake**: the search mutates one board copy and undoes every
//!   move before trying the next
//! - **Move ordering**: the best move of the previous depth is tried first
//! - **Random openings**: shallow AIs open with a random move
//! - **N-Player**: one piece maximizes, all others minimize
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use connectx::core::{BoardConfig, Difficulty, PieceId};
//! use connectx::rules::{AiPlayer, GameBoard};
//! use connectx::search::SearchEngine;
//!
//! let mut engine = SearchEngine::new(BoardConfig::default());
//! engine.set_ai_depth(PieceId::new(1), Difficulty::Advanced.depth());
//! engine.set_ai_depth(PieceId::new(2), Difficulty::Beginner.depth());
//!
//! while !engine.is_terminal() && engine.move_count() < 4 {
//!     engine.play_ai_move(Duration::from_millis(100));
//! }
//! println!("{} evaluations", engine.num_evaluations());
//! ```

pub mod alphabeta;
pub mod config;
pub mod engine;
pub mod eval;
pub mod patterns;
pub mod stats;
pub mod tracked;

pub use alphabeta::{AlphaBeta, SearchResult};
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use eval::Evaluator;
pub use patterns::{ThreatPatterns, TEMPO_SCORE, THREAT_SCORE, WIN_SCORE};
pub use stats::SearchStats;
pub use tracked::TrackedBoard;
