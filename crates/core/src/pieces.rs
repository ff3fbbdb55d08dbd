//! Pieces module - Tetromino shape catalog
//!
//! Every piece kind owns an ordered, cyclic list of rotation states (1, 2 or 4 entries).
//! Rotation is naive: the next state is tried at the same origin and there are no wall
//! kicks. Each state is stored as the four filled cells of its matrix, listed row-major,
//! plus the matrix bounds.

use crate::types::PieceKind;

/// Offset of a single mino relative to the shape's top-left corner
pub type MinoOffset = (i8, i8);

/// One rotation state of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Matrix width (columns)
    pub width: u8,
    /// Matrix height (rows)
    pub height: u8,
    /// Filled cells, row-major
    pub minos: [MinoOffset; 4],
}

impl Shape {
    const fn new(width: u8, height: u8, minos: [MinoOffset; 4]) -> Self {
        Self {
            width,
            height,
            minos,
        }
    }

    /// Whether matrix cell (x, y) is filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        self.minos.contains(&(x, y))
    }

    /// Matrix value at (x, y) for `kind`: `kind + 1` when filled, 0 otherwise
    pub fn cell(&self, kind: PieceKind, x: i8, y: i8) -> u8 {
        if self.is_filled(x, y) {
            kind.cell_value()
        } else {
            0
        }
    }
}

const I_ROTATIONS: [Shape; 2] = [
    // [[1,1,1,1]]
    Shape::new(4, 1, [(0, 0), (1, 0), (2, 0), (3, 0)]),
    // [[1],[1],[1],[1]]
    Shape::new(1, 4, [(0, 0), (0, 1), (0, 2), (0, 3)]),
];

const O_ROTATIONS: [Shape; 1] = [Shape::new(2, 2, [(0, 0), (1, 0), (0, 1), (1, 1)])];

const T_ROTATIONS: [Shape; 4] = [
    // [[3,3,3],[0,3,0]]
    Shape::new(3, 2, [(0, 0), (1, 0), (2, 0), (1, 1)]),
    // [[0,3],[3,3],[0,3]]
    Shape::new(2, 3, [(1, 0), (0, 1), (1, 1), (1, 2)]),
    // [[0,3,0],[3,3,3]]
    Shape::new(3, 2, [(1, 0), (0, 1), (1, 1), (2, 1)]),
    // [[3,0],[3,3],[3,0]]
    Shape::new(2, 3, [(0, 0), (0, 1), (1, 1), (0, 2)]),
];

const S_ROTATIONS: [Shape; 2] = [
    // [[0,4,4],[4,4,0]]
    Shape::new(3, 2, [(1, 0), (2, 0), (0, 1), (1, 1)]),
    // [[4,0],[4,4],[0,4]]
    Shape::new(2, 3, [(0, 0), (0, 1), (1, 1), (1, 2)]),
];

const Z_ROTATIONS: [Shape; 2] = [
    // [[5,5,0],[0,5,5]]
    Shape::new(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]),
    // [[0,5],[5,5],[5,0]]
    Shape::new(2, 3, [(1, 0), (0, 1), (1, 1), (0, 2)]),
];

const J_ROTATIONS: [Shape; 4] = [
    // [[6,0,0],[6,6,6]]
    Shape::new(3, 2, [(0, 0), (0, 1), (1, 1), (2, 1)]),
    // [[0,6],[0,6],[6,6]]
    Shape::new(2, 3, [(1, 0), (1, 1), (0, 2), (1, 2)]),
    // [[6,6,6],[0,0,6]]
    Shape::new(3, 2, [(0, 0), (1, 0), (2, 0), (2, 1)]),
    // [[6,6],[6,0],[6,0]]
    Shape::new(2, 3, [(0, 0), (1, 0), (0, 1), (0, 2)]),
];

const L_ROTATIONS: [Shape; 4] = [
    // [[0,0,7],[7,7,7]]
    Shape::new(3, 2, [(2, 0), (0, 1), (1, 1), (2, 1)]),
    // [[7,0],[7,0],[7,7]]
    Shape::new(2, 3, [(0, 0), (0, 1), (0, 2), (1, 2)]),
    // [[7,7,7],[7,0,0]]
    Shape::new(3, 2, [(0, 0), (1, 0), (2, 0), (0, 1)]),
    // [[7,7],[0,7],[0,7]]
    Shape::new(2, 3, [(0, 0), (1, 0), (1, 1), (1, 2)]),
];

/// All rotation states of a piece kind, in cycle order
pub fn rotations(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_ROTATIONS,
        PieceKind::O => &O_ROTATIONS,
        PieceKind::T => &T_ROTATIONS,
        PieceKind::S => &S_ROTATIONS,
        PieceKind::Z => &Z_ROTATIONS,
        PieceKind::J => &J_ROTATIONS,
        PieceKind::L => &L_ROTATIONS,
    }
}

/// Number of rotation states for a piece kind (1, 2 or 4)
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// Rotation index that follows `rotation` in the cycle
pub fn next_rotation(kind: PieceKind, rotation: u8) -> u8 {
    (rotation + 1) % rotation_count(kind)
}

/// Get the shape for a piece kind and rotation index (wrapped into range)
pub fn shape(kind: PieceKind, rotation: u8) -> Shape {
    let table = rotations(kind);
    table[rotation as usize % table.len()]
}

/// Spawn column that centers the piece's first rotation state on a board of `board_width`
pub fn spawn_x(kind: PieceKind, board_width: u8) -> i8 {
    (board_width / 2) as i8 - (shape(kind, 0).width / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_counts_follow_symmetry() {
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn test_every_state_has_four_minos_inside_its_bounds() {
        for kind in PieceKind::ALL {
            for s in rotations(kind) {
                for &(x, y) in s.minos.iter() {
                    assert!(x >= 0 && (x as u8) < s.width, "{kind:?} {s:?}");
                    assert!(y >= 0 && (y as u8) < s.height, "{kind:?} {s:?}");
                }
                // No duplicate cells.
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(s.minos[i], s.minos[j]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_matrix_view_uses_kind_value() {
        let t = shape(PieceKind::T, 0);
        // [[3,3,3],[0,3,0]]
        let rows: Vec<Vec<u8>> = (0..t.height as i8)
            .map(|y| (0..t.width as i8).map(|x| t.cell(PieceKind::T, x, y)).collect())
            .collect();
        assert_eq!(rows, vec![vec![3, 3, 3], vec![0, 3, 0]]);
    }

    #[test]
    fn test_next_rotation_wraps() {
        assert_eq!(next_rotation(PieceKind::O, 0), 0);
        assert_eq!(next_rotation(PieceKind::I, 1), 0);
        assert_eq!(next_rotation(PieceKind::J, 3), 0);
        assert_eq!(next_rotation(PieceKind::J, 2), 3);
    }

    #[test]
    fn test_spawn_x_centers_first_state() {
        assert_eq!(spawn_x(PieceKind::I, 13), 4);
        assert_eq!(spawn_x(PieceKind::O, 13), 5);
        assert_eq!(spawn_x(PieceKind::T, 13), 5);
        assert_eq!(spawn_x(PieceKind::I, 10), 3);
    }
}
