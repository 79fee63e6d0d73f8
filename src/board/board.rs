//! The board engine: turn order, gravity placement, win and draw detection.

use log::trace;

use crate::core::coord::{canonical_directions, expand, reduce, step, Coord, Direction};
use crate::core::{BoardConfig, ConfigError, DenseGrid, PieceId, Variant};
use crate::rules::{GameBoard, Status};

use super::legal::LegalMoveTable;

/// N-dimensional connect-K board.
///
/// ## Example
///
/// ```
/// use connectx::board::Board;
/// use connectx::core::{BoardConfig, PieceId};
/// use connectx::rules::{GameBoard, Status};
///
/// let mut board = Board::new(BoardConfig::default());
/// for _ in 0..3 {
///     board.apply_move(&board.drop_target(&[3]).unwrap()); // piece 1
///     board.apply_move(&board.drop_target(&[0]).unwrap()); // piece 2
/// }
/// board.apply_move(&board.drop_target(&[3]).unwrap());
///
/// assert_eq!(board.status(), Status::Win);
/// assert_eq!(board.winner(), Some(PieceId::new(1)));
/// assert_eq!(board.winning_coords().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    grid: DenseGrid<Option<PieceId>>,
    pieces: Vec<PieceId>,
    win_threshold: usize,
    turn: usize,
    status: Status,
    history: Vec<Coord>,
    winning: Vec<Coord>,
    legal: LegalMoveTable,
    directions: Vec<Direction>,
    opening: Vec<usize>,
}

impl Board {
    /// Create a board. Panics if the configuration is invalid.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("invalid board configuration: {e}"))
    }

    /// Create a board, rejecting invalid configurations.
    pub fn try_new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = DenseGrid::new(&config.dimensions, None);
        let legal = LegalMoveTable::new(&config.dimensions);
        let directions = canonical_directions(config.dimensions.len());

        Ok(Self {
            grid,
            pieces: config.roster(),
            win_threshold: config.win_threshold,
            turn: 0,
            status: Status::OnGoing,
            history: Vec::with_capacity(config.capacity()),
            winning: Vec::new(),
            legal,
            directions,
            opening: Vec::new(),
        })
    }

    /// Create a board for a preset, with its opening already played.
    ///
    /// `reset` replays the opening.
    ///
    /// ```
    /// use connectx::board::Board;
    /// use connectx::core::{PieceId, Variant};
    /// use connectx::rules::GameBoard;
    ///
    /// let board = Board::from_variant(Variant::FiveInARow);
    /// assert_eq!(board.move_count(), 12);
    /// assert_eq!(board.legal_moves().len(), 7);
    /// assert_eq!(board.next_piece(), PieceId::new(1));
    /// ```
    #[must_use]
    pub fn from_variant(variant: Variant) -> Self {
        let mut board = Self::new(variant.config());
        board.opening = variant.opening();
        board.play_opening();
        board
    }

    fn play_opening(&mut self) {
        for i in 0..self.opening.len() {
            let column = self.opening[i];
            let mv = self
                .drop_target(&[column])
                .unwrap_or_else(|| panic!("opening overfills column {column}"));
            self.apply_move(&mv);
        }
    }

    // === Queries ===

    /// Occupant of a cell. The coordinate must be in bounds.
    #[must_use]
    pub fn cell(&self, coord: &[usize]) -> Option<PieceId> {
        *self.grid.get(coord)
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &DenseGrid<Option<PieceId>> {
        &self.grid
    }

    /// Piece roster in turn order.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Connected pieces needed to win.
    #[must_use]
    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.grid.capacity()
    }

    /// Number of leading history moves that belong to the preset opening.
    #[must_use]
    pub fn opening_plies(&self) -> usize {
        self.opening.len()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// The legal-move table.
    #[must_use]
    pub fn legal_table(&self) -> &LegalMoveTable {
        &self.legal
    }

    /// Canonical line directions (one of each opposite pair).
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Full coordinate a piece dropped into `column` would land on.
    #[must_use]
    pub fn drop_target(&self, column: &[usize]) -> Option<Coord> {
        self.legal.resting_row(column).map(|row| expand(column, row))
    }

    /// Check whether `mv` can be applied right now.
    #[must_use]
    pub fn is_legal(&self, mv: &[usize]) -> bool {
        self.status == Status::OnGoing
            && mv.len() == self.grid.dimensions()
            && mv.iter().zip(self.grid.extents()).all(|(c, e)| c < e)
            && self.legal.resting_row(&mv[1..]) == Some(mv[0])
    }

    // === Move Application ===

    /// Apply a move already known to be legal.
    ///
    /// The search calls this directly on moves it took from `legal_moves`.
    pub(crate) fn place(&mut self, mv: &[usize]) {
        let piece = self.pieces[self.turn];
        self.grid.set(mv, Some(piece));
        self.history.push(Coord::from_slice(mv));

        self.status = if self.check_connected(mv, piece) {
            Status::Win
        } else if self.history.len() == self.grid.capacity() {
            Status::Draw
        } else {
            Status::OnGoing
        };

        self.turn = (self.turn + 1) % self.pieces.len();
        self.legal.occupy(&mv[1..]);
        trace!("{piece} played {mv:?}: {:?}", self.status);
    }

    /// Look for a line of `win_threshold` pieces through `mv`.
    ///
    /// Each canonical direction is walked forward, then backward, with
    /// one shared count. On success `winning` holds exactly the connected
    /// cells that reached the threshold, `mv` last.
    fn check_connected(&mut self, mv: &[usize], piece: PieceId) -> bool {
        for d in 0..self.directions.len() {
            self.winning.clear();
            let mut count = 1;
            if self.explore(d, 1, mv, &mut count, piece) || self.explore(d, -1, mv, &mut count, piece)
            {
                self.winning.push(Coord::from_slice(mv));
                return true;
            }
        }
        self.winning.clear();
        false
    }

    fn explore(
        &mut self,
        direction: usize,
        sign: i8,
        from: &[usize],
        count: &mut usize,
        piece: PieceId,
    ) -> bool {
        let mut at = Coord::from_slice(from);
        while *count < self.win_threshold {
            match step(&at, &self.directions[direction], sign, self.grid.extents()) {
                Some(next) if *self.grid.get(&next) == Some(piece) => {
                    *count += 1;
                    self.winning.push(next.clone());
                    at = next;
                }
                _ => break,
            }
        }
        *count == self.win_threshold
    }
}

impl GameBoard for Board {
    fn apply_move(&mut self, mv: &[usize]) {
        assert!(
            self.status == Status::OnGoing,
            "the game must be ongoing to process a move"
        );
        assert_eq!(
            mv.len(),
            self.grid.dimensions(),
            "move {mv:?} does not match the board's dimensions"
        );
        assert!(
            mv.iter().zip(self.grid.extents()).all(|(c, e)| c < e),
            "move {mv:?} is out of bounds"
        );
        let row = self.legal.resting_row(&mv[1..]);
        assert!(row.is_some(), "column {:?} is full", &mv[1..]);
        assert_eq!(
            row,
            Some(mv[0]),
            "move {mv:?} does not rest on the column's free row"
        );

        self.place(mv);
    }

    fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        self.grid.set(&mv, None);
        self.legal.release(&reduce(&mv));
        self.turn = (self.turn + self.pieces.len() - 1) % self.pieces.len();
        self.winning.clear();
        self.status = Status::OnGoing;
        trace!("undid {mv:?}");
    }

    fn reset(&mut self) {
        self.grid.fill(None);
        self.history.clear();
        self.winning.clear();
        self.turn = 0;
        self.status = Status::OnGoing;
        self.legal = LegalMoveTable::new(self.grid.extents());
        self.play_opening();
    }

    fn status(&self) -> Status {
        self.status
    }

    fn legal_moves(&self) -> Vec<Coord> {
        if self.status == Status::OnGoing {
            self.legal.moves()
        } else {
            Vec::new()
        }
    }

    fn next_piece(&self) -> PieceId {
        self.pieces[self.turn]
    }

    fn last_mover(&self) -> Option<PieceId> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.pieces[(self.turn + self.pieces.len() - 1) % self.pieces.len()])
        }
    }

    fn last_move(&self) -> Option<&Coord> {
        self.history.last()
    }

    fn winning_coords(&self) -> &[Coord] {
        &self.winning
    }

    fn move_count(&self) -> usize {
        self.history.len()
    }

    fn dimensions(&self) -> &[usize] {
        self.grid.extents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Board {
        Board::new(BoardConfig::default())
    }

    fn drop_in(board: &mut Board, column: usize) {
        let mv = board.drop_target(&[column]).expect("column has room");
        board.apply_move(&mv);
    }

    #[test]
    fn test_new_board() {
        let board = classic();
        assert_eq!(board.status(), Status::OnGoing);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.next_piece(), PieceId::new(1));
        assert_eq!(board.last_mover(), None);
        assert_eq!(board.last_move(), None);
        assert_eq!(board.dimensions(), &[6, 7]);
        assert_eq!(board.directions().len(), 4);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        let config = BoardConfig::default().with_pieces([1, 1]);
        assert_eq!(
            Board::try_new(config).unwrap_err(),
            ConfigError::DuplicatePiece(1)
        );
    }

    #[test]
    #[should_panic(expected = "invalid board configuration")]
    fn test_new_panics_on_invalid() {
        let _ = Board::new(BoardConfig::default().with_win_threshold(1));
    }

    #[test]
    fn test_gravity_stacks_pieces() {
        let mut board = classic();
        drop_in(&mut board, 2);
        drop_in(&mut board, 2);
        assert_eq!(board.cell(&[5, 2]), Some(PieceId::new(1)));
        assert_eq!(board.cell(&[4, 2]), Some(PieceId::new(2)));
        assert_eq!(board.legal_table().resting_row(&[2]), Some(3));
    }

    #[test]
    fn test_turn_order_follows_roster() {
        let mut board = Board::new(BoardConfig::default().with_pieces([3, 1, 2]));
        assert_eq!(board.next_piece(), PieceId::new(3));
        drop_in(&mut board, 0);
        assert_eq!(board.next_piece(), PieceId::new(1));
        assert_eq!(board.last_mover(), Some(PieceId::new(3)));
        drop_in(&mut board, 0);
        drop_in(&mut board, 0);
        assert_eq!(board.next_piece(), PieceId::new(3));

        board.undo();
        assert_eq!(board.next_piece(), PieceId::new(2));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = classic();
        for column in 0..3 {
            drop_in(&mut board, column);
            drop_in(&mut board, column);
        }
        drop_in(&mut board, 3);

        assert_eq!(board.status(), Status::Win);
        assert_eq!(board.winner(), Some(PieceId::new(1)));
        let mut cells: Vec<Vec<usize>> =
            board.winning_coords().iter().map(|c| c.to_vec()).collect();
        cells.sort();
        assert_eq!(cells, vec![vec![5, 0], vec![5, 1], vec![5, 2], vec![5, 3]]);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_win_in_the_middle_of_a_line() {
        let mut board = classic();
        // Piece 1 takes columns 0, 1, 3 on the bottom row; piece 2 stacks on top.
        for column in [0, 1, 3] {
            drop_in(&mut board, column);
            drop_in(&mut board, column);
        }
        drop_in(&mut board, 2);

        assert_eq!(board.status(), Status::Win);
        assert_eq!(board.winning_coords().len(), 4);
        assert_eq!(board.winning_coords().last().unwrap().as_slice(), &[5, 2]);
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = classic();
        // Build a rising diagonal for piece 1 at (5,0) (4,1) (3,2) (2,3).
        for column in [0, 1, 1, 2, 2, 3, 2, 3, 3, 6] {
            drop_in(&mut board, column);
        }
        assert_eq!(board.status(), Status::OnGoing);
        drop_in(&mut board, 3);
        assert_eq!(board.status(), Status::Win);
        assert_eq!(board.winner(), Some(PieceId::new(1)));
    }

    #[test]
    fn test_no_win_clears_partial_line() {
        let mut board = classic();
        drop_in(&mut board, 0);
        drop_in(&mut board, 6);
        drop_in(&mut board, 1);
        assert!(board.winning_coords().is_empty());
    }

    #[test]
    fn test_undo_restores_everything() {
        let mut board = classic();
        drop_in(&mut board, 3);
        let before_grid = board.grid().clone();
        let before_table = board.legal_table().clone();
        let before_next = board.next_piece();

        drop_in(&mut board, 3);
        board.undo();

        assert_eq!(board.grid(), &before_grid);
        assert_eq!(board.legal_table(), &before_table);
        assert_eq!(board.next_piece(), before_next);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_undo_after_win_restores_ongoing() {
        let mut board = classic();
        for _ in 0..3 {
            drop_in(&mut board, 0);
            drop_in(&mut board, 1);
        }
        drop_in(&mut board, 0);
        assert_eq!(board.status(), Status::Win);

        board.undo();
        assert_eq!(board.status(), Status::OnGoing);
        assert!(board.winning_coords().is_empty());
        assert_eq!(board.next_piece(), PieceId::new(1));
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut board = classic();
        board.undo();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.next_piece(), PieceId::new(1));
    }

    #[test]
    fn test_reset() {
        let mut board = classic();
        for column in 0..5 {
            drop_in(&mut board, column);
        }
        board.reset();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.next_piece(), PieceId::new(1));
        assert_eq!(board.legal_table(), &LegalMoveTable::new(&[6, 7]));
        assert!(board.grid().find(&None).count() == 42);
    }

    #[test]
    fn test_full_column_leaves_table() {
        let mut board = classic();
        for _ in 0..6 {
            drop_in(&mut board, 4);
        }
        assert_eq!(board.drop_target(&[4]), None);
        assert_eq!(board.legal_moves().len(), 6);

        board.undo();
        assert_eq!(board.drop_target(&[4]).unwrap().as_slice(), &[0, 4]);
    }

    #[test]
    fn test_is_legal() {
        let board = classic();
        assert!(board.is_legal(&[5, 0]));
        assert!(!board.is_legal(&[4, 0]));
        assert!(!board.is_legal(&[5, 7]));
        assert!(!board.is_legal(&[5]));
    }

    #[test]
    #[should_panic(expected = "does not rest on the column's free row")]
    fn test_floating_move_panics() {
        let mut board = classic();
        board.apply_move(&[3, 3]);
    }

    #[test]
    #[should_panic(expected = "must be ongoing")]
    fn test_move_after_win_panics() {
        let mut board = classic();
        for _ in 0..3 {
            drop_in(&mut board, 0);
            drop_in(&mut board, 1);
        }
        drop_in(&mut board, 0);
        board.apply_move(&[5, 2]);
    }

    #[test]
    fn test_five_in_a_row_opening() {
        let board = Board::from_variant(Variant::FiveInARow);
        assert_eq!(board.move_count(), 12);
        assert_eq!(board.opening_plies(), 12);
        assert_eq!(board.status(), Status::OnGoing);
        assert_eq!(board.next_piece(), PieceId::new(1));

        let columns: Vec<usize> = board.legal_moves().iter().map(|m| m[1]).collect();
        assert_eq!(columns.len(), 7);
        assert!(!columns.contains(&0) && !columns.contains(&8));

        // Edge columns alternate from the bottom up.
        assert_eq!(board.cell(&[5, 0]), Some(PieceId::new(1)));
        assert_eq!(board.cell(&[4, 0]), Some(PieceId::new(2)));
        assert_eq!(board.cell(&[5, 8]), Some(PieceId::new(2)));
        assert_eq!(board.cell(&[0, 8]), Some(PieceId::new(1)));
        assert_eq!(board.cell(&[0, 0]), Some(PieceId::new(2)));
    }

    #[test]
    fn test_reset_replays_opening() {
        let mut board = Board::from_variant(Variant::FiveInARow);
        let opened = board.grid().clone();
        let mv = board.legal_moves()[0].clone();
        board.apply_move(&mv);

        board.reset();
        assert_eq!(board.move_count(), 12);
        assert_eq!(board.grid(), &opened);
        assert_eq!(board.next_piece(), PieceId::new(1));
    }

    #[test]
    fn test_variant_without_opening_starts_empty() {
        let board = Board::from_variant(Variant::Classic);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.opening_plies(), 0);
    }

    #[test]
    fn test_three_dimensional_space_diagonal() {
        let config = BoardConfig::new([3, 3, 3], 3);
        let mut board = Board::new(config);
        assert_eq!(board.directions().len(), 13);

        // Piece 1 aims for (2,0,0) (1,1,1) (0,2,2); piece 2 fills support cells.
        let script: [[usize; 2]; 9] = [
            [0, 0], // 1 at (2,0,0)
            [1, 1], // 2 at (2,1,1)
            [1, 1], // 1 at (1,1,1)
            [2, 2], // 2 at (2,2,2)
            [0, 1], // 1 at (2,0,1)
            [2, 2], // 2 at (1,2,2)
            [1, 0], // 1 at (2,1,0)
            [0, 2], // 2 at (2,0,2)
            [2, 2], // 1 at (0,2,2)
        ];
        for column in script {
            let mv = board.drop_target(&column).unwrap();
            board.apply_move(&mv);
        }
        assert_eq!(board.status(), Status::Win);
        assert_eq!(board.winner(), Some(PieceId::new(1)));
    }
}
