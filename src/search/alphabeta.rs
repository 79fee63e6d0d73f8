//! Depth-limited alpha-beta minimax with iterative deepening.
//!
//! ## Algorithm
//!
//! The searcher runs make/unmake on a private copy of the board. One
//! piece is maximizing for the whole search; every other piece
//! minimizes. Moves are tried in `legal_moves` order.
//!
//! Iterative deepening searches depths `1, 2, ...` up to the AI's depth
//! and stops after the first completed depth that overruns the time
//! budget. Between depths the previous best move index is carried as a
//! hint: the root's maximizing loop swaps it to the front and tries it
//! first. Because the swap changes the root order, the returned index
//! is mapped back into the unswapped `legal_moves` order.

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::PieceId;
use crate::rules::{GameBoard, Status};

use super::eval::Evaluator;
use super::patterns::WIN_SCORE;
use super::tracked::TrackedBoard;

/// Outcome of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Index of the best move into `legal_moves`, if any move improved
    /// on the worst case.
    pub best: Option<usize>,
    /// Score of the best move for the maximizing piece.
    pub score: i32,
    /// Depth of the pass that produced this result.
    pub depth: u8,
}

/// Alpha-beta searcher.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    evaluator: Evaluator,
    hint: Option<usize>,
    evaluations: u64,
}

impl AlphaBeta {
    /// Create a searcher sized for `board`.
    #[must_use]
    pub fn new(board: &TrackedBoard) -> Self {
        Self {
            evaluator: Evaluator::new(board),
            hint: None,
            evaluations: 0,
        }
    }

    /// Leaf evaluations performed so far.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Search depths `1..=max_depth` from the piece to move.
    ///
    /// Always completes depth 1. The board is left as it was found.
    pub fn iterative_deepening(
        &mut self,
        board: &mut TrackedBoard,
        max_depth: u8,
        budget: Duration,
    ) -> SearchResult {
        let start = Instant::now();
        let maximizing = board.next_piece();
        self.hint = None;
        self.evaluations = 0;

        let mut result = SearchResult::default();
        for depth in 1..=max_depth {
            let mut pass = self.find_move(board, depth, -WIN_SCORE, WIN_SCORE, maximizing);
            if depth > 1 {
                pass.best = unswap(pass.best, self.hint);
            }
            pass.depth = depth;
            result = pass;

            debug!(
                "depth {depth}: best {:?} score {} after {} evaluations",
                result.best, result.score, self.evaluations
            );

            if start.elapsed() >= budget {
                debug!("time budget exhausted after depth {depth}");
                break;
            }
            self.hint = result.best;
        }
        result
    }

    /// One alpha-beta pass to `depth` plies.
    ///
    /// `best` is an index into this node's move list after the hint swap
    /// (the hint only applies at the first maximizing node reached).
    pub fn find_move(
        &mut self,
        board: &mut TrackedBoard,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: PieceId,
    ) -> SearchResult {
        match board.status() {
            Status::Win => {
                let score = if board.last_mover() == Some(maximizing) {
                    WIN_SCORE
                } else {
                    -WIN_SCORE
                };
                return SearchResult { best: None, score, depth };
            }
            Status::Draw => return SearchResult { best: None, score: 0, depth },
            Status::OnGoing => {}
        }

        if depth == 0 {
            self.evaluations += 1;
            let score = self.evaluator.evaluate(board, maximizing);
            return SearchResult { best: None, score, depth };
        }

        let mut moves = board.legal_moves();
        let mut best = None;

        if board.next_piece() == maximizing {
            let mut best_score = -WIN_SCORE;
            let hint = self.hint;
            if let Some(index) = hint.filter(|&index| index < moves.len()) {
                moves.swap(0, index);
                self.hint = None;
            }

            for (index, mv) in moves.iter().enumerate() {
                board.place(mv);
                let score = self.find_move(board, depth - 1, alpha, beta, maximizing).score;
                board.undo();

                if score > best_score {
                    best_score = score;
                    best = Some(index);
                    alpha = alpha.max(best_score);
                    if best_score == WIN_SCORE {
                        break;
                    }
                }
                if beta <= alpha {
                    break;
                }
            }

            self.hint = hint;
            SearchResult { best, score: best_score, depth }
        } else {
            let mut best_score = WIN_SCORE;
            for (index, mv) in moves.iter().enumerate() {
                board.place(mv);
                let score = self.find_move(board, depth - 1, alpha, beta, maximizing).score;
                board.undo();

                if score < best_score {
                    best_score = score;
                    best = Some(index);
                    beta = beta.min(best_score);
                    if best_score == -WIN_SCORE {
                        break;
                    }
                }
                if beta <= alpha {
                    break;
                }
            }
            SearchResult { best, score: best_score, depth }
        }
    }
}

/// Map an index from the hint-swapped root order back to `legal_moves`
/// order: slot 0 holds the hinted move and the hinted slot holds move 0.
fn unswap(best: Option<usize>, hint: Option<usize>) -> Option<usize> {
    if best == Some(0) {
        hint
    } else if best == hint {
        Some(0)
    } else {
        best
    }
}
