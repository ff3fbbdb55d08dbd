//! Piece catalog tests: rotation cycles, matrix bounds and spawn columns

use blockfall::core::pieces::{next_rotation, rotation_count, spawn_x};
use blockfall::core::{rotations, shape, Tetromino};
use blockfall::types::{PieceKind, BOARD_WIDTH};

#[test]
fn test_rotation_counts() {
    let counts: Vec<u8> = PieceKind::ALL.iter().map(|&k| rotation_count(k)).collect();
    // I O T S Z J L
    assert_eq!(counts, vec![2, 1, 4, 2, 2, 4, 4]);
}

#[test]
fn test_every_state_has_four_cells_inside_its_matrix() {
    for kind in PieceKind::ALL {
        for s in rotations(kind) {
            let filled: usize = (0..s.height as i8)
                .flat_map(|y| (0..s.width as i8).map(move |x| (x, y)))
                .filter(|&(x, y)| s.is_filled(x, y))
                .count();
            assert_eq!(filled, 4, "{kind:?} state {s:?}");
            for &(x, y) in s.minos.iter() {
                assert!(x >= 0 && (x as u8) < s.width);
                assert!(y >= 0 && (y as u8) < s.height);
            }
        }
    }
}

#[test]
fn test_rotation_cycle_returns_to_start() {
    for kind in PieceKind::ALL {
        let mut r = 0;
        for _ in 0..rotation_count(kind) {
            r = next_rotation(kind, r);
        }
        assert_eq!(r, 0, "{kind:?}");
    }
}

#[test]
fn test_first_states_match_catalog_bounds() {
    let bounds: Vec<(u8, u8)> = PieceKind::ALL
        .iter()
        .map(|&k| {
            let s = shape(k, 0);
            (s.width, s.height)
        })
        .collect();
    assert_eq!(
        bounds,
        vec![(4, 1), (2, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2)]
    );
}

#[test]
fn test_matrix_values_use_kind_plus_one() {
    let t = shape(PieceKind::T, 0);
    assert_eq!(t.cell(PieceKind::T, 1, 1), 3);
    assert_eq!(t.cell(PieceKind::T, 0, 1), 0);

    let l = shape(PieceKind::L, 0);
    assert_eq!(l.cell(PieceKind::L, 2, 0), 7);
    assert_eq!(l.cell(PieceKind::L, 0, 0), 0);
}

#[test]
fn test_spawn_columns_center_the_piece() {
    assert_eq!(spawn_x(PieceKind::I, BOARD_WIDTH), 4);
    assert_eq!(spawn_x(PieceKind::O, BOARD_WIDTH), 5);
    assert_eq!(spawn_x(PieceKind::T, BOARD_WIDTH), 5);
    assert_eq!(spawn_x(PieceKind::I, 10), 3);

    let piece = Tetromino::spawn(PieceKind::J, BOARD_WIDTH);
    assert_eq!((piece.x, piece.y, piece.rotation), (5, 0, 0));
}

#[test]
fn test_rotated_wraps_state() {
    let mut piece = Tetromino::spawn(PieceKind::S, BOARD_WIDTH);
    piece = piece.rotated();
    assert_eq!(piece.rotation, 1);
    piece = piece.rotated();
    assert_eq!(piece.rotation, 0);

    let o = Tetromino::spawn(PieceKind::O, BOARD_WIDTH).rotated();
    assert_eq!(o.rotation, 0);
}
