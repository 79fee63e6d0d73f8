//! Capability traits for boards and AI players.
//!
//! `GameBoard` is what every board offers: move application, undo,
//! reset and state queries. `AiPlayer` adds AI configuration and move
//! computation on top of a `GameBoard`. Boards compose by delegation:
//! the search engine wraps a board and forwards the base capabilities.

use std::time::Duration;

use crate::core::{Coord, PieceId};

/// Game status. Transitions happen only through move application,
/// undo and reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Moves can still be played.
    #[default]
    OnGoing,
    /// The board is full with no winner.
    Draw,
    /// The last move connected enough pieces.
    Win,
}

impl Status {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::OnGoing)
    }
}

/// Board capabilities.
///
/// ## Implementation Notes
///
/// - `apply_move`: panics on a finished game or an illegal coordinate
/// - `undo`: no-op on an empty history, always restores `OnGoing`
/// - `legal_moves`: empty unless the status is `OnGoing`, in a fixed
///   order that search move ordering depends on
pub trait GameBoard {
    /// Drop the next piece at `mv`.
    fn apply_move(&mut self, mv: &[usize]);

    /// Take back the last move.
    fn undo(&mut self);

    /// Clear the board and start over.
    fn reset(&mut self);

    /// Current status.
    fn status(&self) -> Status;

    /// All legal moves in canonical order.
    fn legal_moves(&self) -> Vec<Coord>;

    /// Piece whose turn it is.
    fn next_piece(&self) -> PieceId;

    /// Piece that made the last move, if any move was played.
    fn last_mover(&self) -> Option<PieceId>;

    /// Last applied move.
    fn last_move(&self) -> Option<&Coord>;

    /// Connected coordinates of the winning line (empty unless `Win`).
    fn winning_coords(&self) -> &[Coord];

    /// Number of moves played.
    fn move_count(&self) -> usize;

    /// Axis extents.
    fn dimensions(&self) -> &[usize];

    // === Convenience Methods ===

    /// Winner of the game, if it has been won.
    fn winner(&self) -> Option<PieceId> {
        match self.status() {
            Status::Win => self.last_mover(),
            _ => None,
        }
    }

    /// Check whether the game has ended.
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}

/// AI capabilities layered over a `GameBoard`.
pub trait AiPlayer: GameBoard {
    /// Put `piece` under AI control searching to `depth`.
    ///
    /// A depth of zero hands the piece back to external control.
    fn set_ai_depth(&mut self, piece: PieceId, depth: u8);

    /// Search depth of `piece`, or `None` if it is externally controlled.
    fn ai_depth(&self, piece: PieceId) -> Option<u8>;

    /// Compute a move for the piece to move, which must be AI-controlled.
    fn compute_ai_move(&mut self, budget: Duration) -> Coord;

    /// Check whether the piece to move is AI-controlled.
    fn is_ai_turn(&self) -> bool {
        self.ai_depth(self.next_piece()).is_some()
    }

    /// Compute the AI move and play it. Returns the move played.
    fn play_ai_move(&mut self, budget: Duration) -> Coord {
        let mv = self.compute_ai_move(budget);
        self.apply_move(&mv);
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_terminal() {
        assert!(!Status::OnGoing.is_terminal());
        assert!(Status::Draw.is_terminal());
        assert!(Status::Win.is_terminal());
        assert_eq!(Status::default(), Status::OnGoing);
    }
}
