//! A board that also tracks each piece's placements.
//!
//! Static evaluation walks lines out of every placed piece, so the
//! search keeps per-piece placement lists next to the board. The lists
//! change in lockstep with the board's history: a move appends to the
//! mover's list, an undo pops from the list of the piece whose turn
//! it becomes.

use crate::core::{BoardConfig, ConfigError, Coord, PieceId, PieceMap, Variant};
use crate::rules::{GameBoard, Status};

use crate::board::Board;

/// `Board` plus per-piece placement lists.
#[derive(Clone, Debug)]
pub struct TrackedBoard {
    board: Board,
    placements: PieceMap<Vec<Coord>>,
}

impl TrackedBoard {
    /// Create a tracked board. Panics if the configuration is invalid.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self::from_board(Board::new(config))
    }

    /// Create a tracked board, rejecting invalid configurations.
    pub fn try_new(config: BoardConfig) -> Result<Self, ConfigError> {
        Board::try_new(config).map(Self::from_board)
    }

    /// Create a tracked board for a preset, with its opening already played.
    #[must_use]
    pub fn from_variant(variant: Variant) -> Self {
        Self::from_board(Board::from_variant(variant))
    }

    /// Start tracking an existing board, replaying its history.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let placements = PieceMap::with_default(board.pieces());
        let mut tracked = Self { board, placements };
        tracked.replay_history();
        tracked
    }

    fn replay_history(&mut self) {
        for (_, list) in self.placements.iter_mut() {
            list.clear();
        }
        let roster = self.board.pieces();
        for (ply, mv) in self.board.history().iter().enumerate() {
            self.placements[roster[ply % roster.len()]].push(mv.clone());
        }
    }

    /// The wrapped board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates `piece` occupies, in placement order.
    #[must_use]
    pub fn placements(&self, piece: PieceId) -> &[Coord] {
        &self.placements[piece]
    }

    /// All placement lists, in roster order.
    #[must_use]
    pub fn all_placements(&self) -> &PieceMap<Vec<Coord>> {
        &self.placements
    }

    /// Apply a move taken from `legal_moves` without re-validating it.
    pub(crate) fn place(&mut self, mv: &[usize]) {
        let piece = self.board.next_piece();
        self.board.place(mv);
        self.placements[piece].push(Coord::from_slice(mv));
    }
}

impl GameBoard for TrackedBoard {
    fn apply_move(&mut self, mv: &[usize]) {
        let piece = self.board.next_piece();
        self.board.apply_move(mv);
        self.placements[piece].push(Coord::from_slice(mv));
    }

    fn undo(&mut self) {
        if self.board.move_count() == 0 {
            return;
        }
        self.board.undo();
        let piece = self.board.next_piece();
        self.placements[piece].pop();
    }

    fn reset(&mut self) {
        self.board.reset();
        self.replay_history();
    }

    fn status(&self) -> Status {
        self.board.status()
    }

    fn legal_moves(&self) -> Vec<Coord> {
        self.board.legal_moves()
    }

    fn next_piece(&self) -> PieceId {
        self.board.next_piece()
    }

    fn last_mover(&self) -> Option<PieceId> {
        self.board.last_mover()
    }

    fn last_move(&self) -> Option<&Coord> {
        self.board.last_move()
    }

    fn winning_coords(&self) -> &[Coord] {
        self.board.winning_coords()
    }

    fn move_count(&self) -> usize {
        self.board.move_count()
    }

    fn dimensions(&self) -> &[usize] {
        self.board.dimensions()
    }
}
