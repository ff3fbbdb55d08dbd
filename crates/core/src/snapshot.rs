//! Owned, read-only view of a game session for renderers and the HUD.

use crate::game_state::Tetromino;
use crate::pieces::{shape, Shape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    pub fn shape(&self) -> Shape {
        shape(self.kind, self.rotation)
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Cell values, row-major: 0 empty, 1..=7 piece kind + 1
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell value at (x, y); 0 outside the board
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        if x >= self.width as usize || y >= self.height as usize {
            return 0;
        }
        self.board[y * self.width as usize + x]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width as usize && y < self.height as usize {
            self.board[y * self.width as usize + x] = value;
        }
    }

    pub fn playable(&self) -> bool {
        self.running && !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![0u8; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: 1000,
            running: false,
            paused: false,
            game_over: false,
        }
    }
}
