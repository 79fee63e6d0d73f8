//! Board rule verification tests.
//!
//! These tests drive whole games through the public `GameBoard` API and
//! check gravity, turn order, win and draw detection, and exact undo on
//! 2D, 3D and N-player boards.

use connectx::board::{Board, LegalMoveTable};
use connectx::core::{BoardConfig, ConfigError, PieceId, Variant};
use connectx::rules::{GameBoard, Status};

/// Drop the next piece into a column.
fn drop_in(board: &mut Board, column: &[usize]) {
    let mv = board
        .drop_target(column)
        .unwrap_or_else(|| panic!("column {column:?} is full"));
    board.apply_move(&mv);
}

fn play(board: &mut Board, columns: &[usize]) {
    for &column in columns {
        drop_in(board, &[column]);
    }
}

/// A 42-move classic game in which nobody connects four.
const DRAWN_GAME: [usize; 42] = [
    6, 4, 6, 2, 3, 0, 0, 2, 1, 6, 6, 2, 4, 6, 4, 5, 3, 6, 1, 5, 1, 3, 0, 5, 2, 1, 2, 0, 2, 3,
    5, 4, 1, 1, 4, 3, 5, 4, 3, 5, 0, 0,
];

/// A fresh classic board offers 7 moves, all on the bottom row.
#[test]
fn test_initial_legal_moves() {
    let board = Board::new(Variant::Classic.config());
    let moves = board.legal_moves();

    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|mv| mv[0] == 5));
    assert_eq!(board.legal_table().len(), 7);
}

/// Four stacked pieces win, and the winning set holds exactly those four.
#[test]
fn test_vertical_win() {
    let mut board = Board::new(BoardConfig::default());
    play(&mut board, &[0, 1, 0, 1, 0, 1, 0]);

    assert_eq!(board.status(), Status::Win);
    assert_eq!(board.winner(), Some(PieceId::new(1)));

    let mut rows: Vec<usize> = board.winning_coords().iter().map(|c| c[0]).collect();
    rows.sort_unstable();
    assert_eq!(rows, vec![2, 3, 4, 5]);
    assert!(board.winning_coords().iter().all(|c| c[1] == 0));
}

/// A full board with no line of four is a draw.
#[test]
fn test_full_board_draw() {
    let mut board = Board::new(BoardConfig::default());
    for (ply, &column) in DRAWN_GAME.iter().enumerate() {
        assert_eq!(board.status(), Status::OnGoing, "game ended early at ply {ply}");
        drop_in(&mut board, &[column]);
    }

    assert_eq!(board.status(), Status::Draw);
    assert_eq!(board.history().len(), 42);
    assert_eq!(board.winner(), None);
    assert!(board.legal_moves().is_empty());
    assert!(board.legal_table().is_empty());
}

/// Undoing the draw one move at a time returns to the empty board.
#[test]
fn test_undo_whole_game() {
    let mut board = Board::new(BoardConfig::default());
    play(&mut board, &DRAWN_GAME);

    for _ in 0..DRAWN_GAME.len() {
        board.undo();
        assert_eq!(board.status(), Status::OnGoing);
    }

    assert_eq!(board.move_count(), 0);
    assert_eq!(board.next_piece(), PieceId::new(1));
    assert_eq!(board.legal_table(), &LegalMoveTable::new(&[6, 7]));
    assert_eq!(board.grid().find(&None).count(), 42);
}

/// Three pieces take turns in roster order and any of them can win.
#[test]
fn test_three_player_game() {
    let config = BoardConfig::default().with_pieces([1, 2, 3]);
    let mut board = Board::new(config);

    play(&mut board, &[0, 1, 2, 0, 1, 2, 0, 1, 2]);
    assert_eq!(board.status(), Status::OnGoing);
    assert_eq!(board.next_piece(), PieceId::new(1));

    play(&mut board, &[0]);
    assert_eq!(board.winner(), Some(PieceId::new(1)));
    assert_eq!(board.move_count(), 10);
}

/// Draw detection counts every cell of a 3D board.
#[test]
fn test_three_dimensional_board() {
    let config = BoardConfig::new([2, 2, 2], 3);
    let mut board = Board::new(config);
    assert_eq!(board.capacity(), 8);
    assert_eq!(board.directions().len(), 13);
    assert_eq!(board.legal_moves().len(), 4);

    // A 2x2x2 board cannot hold a line of 3.
    let columns = [[0, 0], [0, 1], [1, 0], [1, 1], [0, 0], [0, 1], [1, 0], [1, 1]];
    for column in columns {
        drop_in(&mut board, &column);
    }
    assert_eq!(board.status(), Status::Draw);
}

/// Every preset variant builds a valid board.
#[test]
fn test_variant_presets() {
    for variant in Variant::ALL {
        let config = variant.config();
        let board = Board::try_new(config.clone()).expect("presets are valid");
        assert_eq!(board.capacity(), config.capacity());
        assert_eq!(board.legal_moves().len(), config.dimensions[1]);
    }
}

/// Five-in-a-row starts with both edge columns filled, piece 1 to move.
#[test]
fn test_five_in_a_row_opening() {
    let mut board = Board::from_variant(Variant::FiveInARow);
    assert_eq!(board.move_count(), 12);
    assert_eq!(board.legal_moves().len(), 7);
    assert_eq!(board.next_piece(), PieceId::new(1));
    assert_eq!(board.status(), Status::OnGoing);

    play(&mut board, &[4, 4]);
    board.reset();
    assert_eq!(board.move_count(), 12);
    assert_eq!(board.legal_moves().len(), 7);
    assert_eq!(board.cell(&[4, 4]), None);
}

/// Invalid configurations come back as errors from `try_new`.
#[test]
fn test_invalid_configurations() {
    let cases = [
        (BoardConfig::default().with_pieces([1]), ConfigError::TooFewPieces(1)),
        (BoardConfig::default().with_pieces([1, 0]), ConfigError::EmptyPieceId),
        (BoardConfig::default().with_dimensions([7]), ConfigError::TooFewDimensions(1)),
        (
            BoardConfig::default().with_dimensions([6, 0]),
            ConfigError::ZeroExtent { axis: 1 },
        ),
        (BoardConfig::default().with_win_threshold(2), ConfigError::ThresholdTooSmall(2)),
        (
            BoardConfig::default().with_dimensions([2; 11]),
            ConfigError::TooManyDimensions(11),
        ),
    ];

    for (config, expected) in cases {
        assert_eq!(Board::try_new(config).unwrap_err(), expected);
    }
}

/// Boards are independent values: a clone diverges from its source.
#[test]
fn test_clone_is_independent() {
    let mut board = Board::new(BoardConfig::default());
    play(&mut board, &[3, 3]);
    let snapshot = board.clone();

    play(&mut board, &[4]);
    assert_eq!(snapshot.move_count(), 2);
    assert_eq!(board.move_count(), 3);
    assert_eq!(snapshot.cell(&[5, 4]), None);
}
