//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable per session):
//!
//! - **Width**: 13 columns (indexed 0-12)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, row 0
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Default loop cadence (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity at level 1 |
//! | `DROP_STEP_MS` | 50 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 50 | Fastest possible gravity |
//!
//! # Drop Intervals by Level
//!
//! `interval = max(50, 1000 - (level - 1) * 50)`
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 950ms |
//! | 10 | 550ms |
//! | 19+ | 100ms .. 50ms floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.cell_value(), 3);
//! assert_eq!(PieceKind::from_cell_value(3), Some(PieceKind::T));
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 13);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (13 columns)
pub const BOARD_WIDTH: u8 = 13;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest board edge accepted by the session config.
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest board edge accepted by the session config.
///
/// Coordinates are `i8`, so this leaves headroom for shape offsets and drop distances.
pub const MAX_BOARD_DIM: u8 = 64;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level above 1
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level in effect before the clear.
///
/// There is no multi-line bonus: four lines score exactly four times one line.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points per row descended by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Points per successful manual soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Level at session start
pub const START_LEVEL: u32 = 1;


/// The seven tetromino piece kinds
///
/// The declaration order is the catalog order: `I` is type 0 and `L` is type 6.
/// A locked cell stores `type + 1`, which doubles as the palette index:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index in `[0, 6]`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a catalog index, `None` outside `[0, 6]`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value written into a board cell when this kind locks (`index + 1`)
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Kind stored under a board cell value; `0` (empty) and anything above 7 map to `None`
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Uppercase letter used by the HUD
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each key the input layer recognizes maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (+1 point when it moves)
    SoftDrop,
    /// Drop piece to its lowest legal position and lock it
    HardDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Toggle pause state
    Pause,
    /// Restart the session (the only action accepted once the game is over)
    Restart,
}

impl GameAction {
    /// Convert to camelCase string (used as a structured log field)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (value 0)
/// - `Some(PieceKind)`: Cell filled with the specified piece kind (value 1..=7)
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<PieceKind>;

/// Numeric value of a board cell: 0 when empty, `kind + 1` otherwise
pub fn cell_value(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::cell_value)
}
