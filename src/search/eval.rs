//! Static evaluation of non-terminal positions.
//!
//! ## Scoring
//!
//! A position is scored from one piece's point of view: the line score
//! of its own placements minus the line scores of every other piece.
//!
//! For one piece and one canonical direction, each placement not yet
//! swept by an earlier line starts a scan along `+direction` and then
//! `-direction`. The scan collects own pieces and up to `k - 1`
//! consecutive empties into a line string (own piece `1`, empty `0`)
//! and counts the own pieces seen:
//!
//! - a line shorter than `k` scores the piece count
//! - a line of `k` or more with at least `k - 1` pieces scores
//!   `THREAT_SCORE` if it contains a threat pattern, else
//!   `TEMPO_SCORE` if the piece is next to move, else `count * k`
//! - otherwise `count * k`
//!
//! Pieces reached by a scan are marked swept for that direction; the
//! scan's own start cell is not.

use crate::core::coord::step;
use crate::core::{Coord, DenseGrid, PieceId};
use crate::rules::GameBoard;

use super::patterns::{ThreatPatterns, EMPTY, OCCUPIED, TEMPO_SCORE, THREAT_SCORE};
use super::tracked::TrackedBoard;

/// Line-pattern evaluator with reusable scratch space.
#[derive(Clone, Debug)]
pub struct Evaluator {
    patterns: ThreatPatterns,
    win_threshold: usize,
    swept: DenseGrid<bool>,
    line: Vec<u8>,
}

impl Evaluator {
    /// Create an evaluator sized for `board`.
    #[must_use]
    pub fn new(board: &TrackedBoard) -> Self {
        let win_threshold = board.board().win_threshold();
        Self {
            patterns: ThreatPatterns::new(win_threshold),
            win_threshold,
            swept: DenseGrid::new(board.dimensions(), false),
            line: Vec::new(),
        }
    }

    /// The threat patterns in use.
    #[must_use]
    pub fn patterns(&self) -> &ThreatPatterns {
        &self.patterns
    }

    /// Score the position for `maximizing`.
    pub fn evaluate(&mut self, board: &TrackedBoard, maximizing: PieceId) -> i32 {
        let mut score = 0;
        for (piece, placements) in board.all_placements().iter() {
            let piece_score = self.score_piece(board, piece, placements);
            if piece == maximizing {
                score += piece_score;
            } else {
                score -= piece_score;
            }
        }
        score
    }

    /// Sum of line scores for one piece over every direction.
    fn score_piece(&mut self, board: &TrackedBoard, piece: PieceId, placements: &[Coord]) -> i32 {
        let mut score = 0;
        for direction in board.board().directions() {
            self.swept.fill(false);
            for start in placements {
                if !*self.swept.get(start) {
                    score += self.score_line(board, piece, start, direction);
                }
            }
        }
        score
    }

    fn score_line(
        &mut self,
        board: &TrackedBoard,
        piece: PieceId,
        start: &[usize],
        direction: &[i8],
    ) -> i32 {
        let k = self.win_threshold;
        self.line.clear();

        let mut count = 1 + self.scan(board, piece, start, direction, 1);
        self.line.reverse();
        self.line.push(OCCUPIED);
        count += self.scan(board, piece, start, direction, -1);

        let spread = (count * k) as i32;
        if self.line.len() < k {
            count as i32
        } else if count + 1 < k {
            spread
        } else if self.patterns.matches(&self.line) {
            THREAT_SCORE
        } else if board.next_piece() == piece {
            TEMPO_SCORE
        } else {
            spread
        }
    }

    /// Walk from `start` along `sign * direction`, appending to the line.
    /// Returns the number of own pieces met.
    fn scan(
        &mut self,
        board: &TrackedBoard,
        piece: PieceId,
        start: &[usize],
        direction: &[i8],
        sign: i8,
    ) -> usize {
        let grid = board.board().grid();
        let mut at = Coord::from_slice(start);
        let mut count = 0;
        let mut empties = 0;

        while let Some(next) = step(&at, direction, sign, grid.extents()) {
            match *grid.get(&next) {
                Some(occupant) if occupant == piece => {
                    self.swept.set(&next, true);
                    count += 1;
                    empties = 0;
                    self.line.push(OCCUPIED);
                }
                None if empties + 1 < self.win_threshold => {
                    empties += 1;
                    self.line.push(EMPTY);
                }
                _ => break,
            }
            at = next;
        }
        count
    }
}
