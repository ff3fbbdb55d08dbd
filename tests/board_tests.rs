//! Board tests: collision, locking and row clearing through the public API

use blockfall::core::{shape, Board};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..board.width() as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), 13);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cells().len(), 13 * 20);
    assert_eq!(board.filled_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(board.is_out_of_bounds(13, 0));
    assert!(!board.is_out_of_bounds(12, 19));
}

#[test]
fn test_board_set_and_value() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.value(5, 10), Some(3));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.value(5, 10), Some(0));
    assert!(!board.set(13, 0, Some(PieceKind::I)));
}

#[test]
fn test_collision_with_walls_and_floor() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let i = shape(PieceKind::I, 0);

    assert!(!board.collides(&i, 0, 0));
    assert!(!board.collides(&i, 9, 19));
    assert!(board.collides(&i, -1, 0));
    assert!(board.collides(&i, 10, 0));
    assert!(board.collides(&i, 0, 20));
}

#[test]
fn test_rows_above_board_never_collide() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    fill_row(&mut board, 0, PieceKind::Z);
    let vertical_i = shape(PieceKind::I, 1);

    // Rows -4..-1 are above the board; only the side walls apply there.
    assert!(!board.collides(&vertical_i, 3, -4));
    assert!(board.collides(&vertical_i, 3, -3));
    assert!(board.collides(&vertical_i, -1, -4));
}

#[test]
fn test_collision_with_locked_cells() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    board.set(6, 19, Some(PieceKind::O));
    let o = shape(PieceKind::O, 0);

    assert!(board.collides(&o, 5, 18));
    assert!(board.collides(&o, 6, 18));
    assert!(!board.collides(&o, 7, 18));
    assert!(!board.collides(&o, 5, 17));
}

#[test]
fn test_lock_piece_writes_kind_values() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let t = shape(PieceKind::T, 0);

    assert!(board.lock_piece(&t, 4, 18, PieceKind::T));
    assert_eq!(board.value(4, 18), Some(3));
    assert_eq!(board.value(5, 18), Some(3));
    assert_eq!(board.value(6, 18), Some(3));
    assert_eq!(board.value(5, 19), Some(3));
    assert_eq!(board.value(4, 19), Some(0));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_lock_piece_partly_above_board() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let vertical_i = shape(PieceKind::I, 1);

    assert!(!board.lock_piece(&vertical_i, 2, -2, PieceKind::I));
    assert_eq!(board.value(2, 0), Some(1));
    assert_eq!(board.value(2, 1), Some(1));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_single_row_shifts_down() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    fill_row(&mut board, 19, PieceKind::I);
    board.set(3, 18, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(board.value(3, 19), Some(4));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.height(), BOARD_HEIGHT);
}

#[test]
fn test_clear_adjacent_rows_rechecks_index() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    fill_row(&mut board, 19, PieceKind::J);
    fill_row(&mut board, 18, PieceKind::L);
    fill_row(&mut board, 17, PieceKind::T);
    board.set(0, 16, Some(PieceKind::O));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);
    assert!(cleared.iter().all(|&row| row == 19));
    assert_eq!(board.value(0, 19), Some(2));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    fill_row(&mut board, 19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::S));
    fill_row(&mut board, 17, PieceKind::I);
    board.set(1, 16, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(board.value(0, 19), Some(4));
    assert_eq!(board.value(1, 18), Some(5));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_full_board() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, PieceKind::O);
    }
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for x in 0..12 {
        board.set(x, 19, Some(PieceKind::L));
    }
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.cells(), before.cells());
}

#[test]
fn test_custom_dimensions() {
    let mut board = Board::new(4, 6);
    assert_eq!(board.rows().count(), 6);
    fill_row(&mut board, 5, PieceKind::I);
    assert_eq!(board.clear_full_rows().len(), 1);

    let mut values = Vec::new();
    board.write_values(&mut values);
    assert_eq!(values, vec![0u8; 24]);
}
