//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, and scoring.
//! It handles drop timing, piece movement, rotation, locking, line clears, and the
//! session lifecycle:
//!
//! ```text
//! Idle --start--> Running <--toggle_pause--> Paused
//!                    |
//!                    v
//!                  Over --restart--> Running
//! ```
//!
//! Illegal commands (blocked moves, commands while paused or over) are silent no-ops.

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::pieces::{next_rotation, shape, spawn_x, Shape};
use crate::rng::PieceGenerator;
use crate::scoring::{apply_line_clear, calculate_drop_score, drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// A falling piece: kind, rotation index and the board position of its matrix's top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece in its first rotation state, centered on a board `board_width` wide, at row 0
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            rotation: 0,
            x: spawn_x(kind, board_width),
            y: 0,
        }
    }

    /// Shape for the current rotation
    pub fn shape(&self) -> Shape {
        shape(self.kind, self.rotation)
    }

    /// Same piece advanced to its next rotation state, at the same position
    pub fn rotated(&self) -> Self {
        Self {
            rotation: next_rotation(self.kind, self.rotation),
            ..*self
        }
    }
}

/// Coarse lifecycle state derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Paused,
    Over,
}

/// Emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// The piece locked with a cell above the board and ended the game
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: Option<Tetromino>,
    generator: PieceGenerator,
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    running: bool,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create an idle session. Call [`GameState::start`] to spawn the first piece.
    ///
    /// The config is expected to be validated; dimensions outside the supported range are
    /// clamped by [`Board::new`], and [`GameState::board`] reports the size in effect.
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.width, config.height);
        Self {
            board,
            active: None,
            next: None,
            generator: PieceGenerator::with_seed(config.seed),
            last_event: None,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
            drop_timer_ms: 0,
            running: false,
            paused: false,
            game_over: false,
        }
    }

    /// Idle session on the default board with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig::seeded(seed))
    }

    /// Leave Idle and spawn the first piece. No-op once the session has started.
    pub fn start(&mut self) {
        if self.running || self.game_over {
            return;
        }
        info!(
            width = self.board.width(),
            height = self.board.height(),
            seed = ?self.generator.seed(),
            "session start"
        );
        self.reset_session();
    }

    /// Reinitialize board, pieces and counters and return to Running from any state
    pub fn restart(&mut self) {
        info!(score = self.score, lines = self.lines, level = self.level, "restart");
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.generator.reset();
        self.last_event = None;
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = drop_interval_ms(START_LEVEL);
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.running = true;
        self.spawn_piece();
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::Over
        } else if !self.running {
            SessionPhase::Idle
        } else if self.paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Time accumulated towards the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_values(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
        out.running = self.running;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Whether `piece` would collide with its matrix placed at (x, y).
    ///
    /// Only the piece's shape is used; its own position is ignored.
    pub fn check_collision(&self, piece: &Tetromino, x: i8, y: i8) -> bool {
        self.board.collides(&piece.shape(), x, y)
    }

    fn new_piece(&mut self) -> Tetromino {
        Tetromino::spawn(self.generator.next_kind(), self.board.width())
    }

    /// Promote the next piece to active and generate a fresh next piece.
    ///
    /// Returns `false` (and ends the game) when the new active piece collides at its spawn
    /// position. The blocked piece stays active so it can still be queried.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.new_piece(),
        };
        self.active = Some(piece);
        self.next = Some(self.new_piece());

        if self.check_collision(&piece, piece.x, piece.y) {
            self.end_game("spawn blocked");
            return false;
        }

        debug!(kind = piece.kind.letter(), x = piece.x, "spawn");
        true
    }

    fn end_game(&mut self, reason: &'static str) {
        self.game_over = true;
        self.running = false;
        info!(
            reason,
            score = self.score,
            lines = self.lines,
            level = self.level,
            "game over"
        );
    }

    /// Movement and rotation are only legal with an active piece in a live, unpaused session
    fn can_control(&self) -> bool {
        self.active.is_some() && !self.game_over && !self.paused
    }

    /// Try to move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_control() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let x = active.x + dx;
        let y = active.y + dy;
        if self.check_collision(&active, x, y) {
            return false;
        }

        self.active = Some(Tetromino { x, y, ..active });
        true
    }

    /// Try to advance the active piece to its next rotation state in place.
    ///
    /// No alternate offsets are tried: if the rotated shape collides, nothing changes.
    pub fn try_rotate(&mut self) -> bool {
        if !self.can_control() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if self.check_collision(&rotated, rotated.x, rotated.y) {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn rotate(&mut self) -> bool {
        self.try_rotate()
    }

    /// Move the active piece down one row, scoring a point only when it moves.
    /// A blocked soft drop does not lock the piece.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score = self.score.saturating_add(calculate_drop_score(1, false));
        }
        moved
    }

    /// Drop the active piece as far as it goes (2 points per row) and lock it immediately.
    ///
    /// Returns the number of rows descended.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.can_control() {
            return 0;
        }

        let mut drop_distance: u32 = 0;
        while self.try_move(0, 1) {
            drop_distance += 1;
        }
        self.score = self
            .score
            .saturating_add(calculate_drop_score(drop_distance, true));

        self.lock_piece();
        drop_distance
    }

    /// Commit the active piece into the board, clear lines and spawn the next piece.
    ///
    /// If any filled cell is above the board the game ends instead; cells already on the
    /// board stay written.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let fully_visible =
            self.board
                .lock_piece(&active.shape(), active.x, active.y, active.kind);

        if !fully_visible {
            self.last_event = Some(LockEvent {
                lines_cleared: 0,
                line_clear_score: 0,
                topped_out: true,
            });
            self.end_game("locked above board");
            return;
        }

        let score_before = self.score;
        let lines_cleared = self.clear_lines();
        self.last_event = Some(LockEvent {
            lines_cleared,
            line_clear_score: self.score - score_before,
            topped_out: false,
        });
        debug!(
            kind = active.kind.letter(),
            x = active.x,
            y = active.y,
            lines_cleared,
            "lock"
        );

        self.spawn_piece();
    }

    /// Remove every full row and update lines, score, level and gravity.
    ///
    /// Returns the number of rows cleared in this pass.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared_rows = self.board.clear_full_rows();
        let cleared = cleared_rows.len() as u32;
        if cleared == 0 {
            return 0;
        }

        let result = apply_line_clear(cleared, self.lines, self.score, self.level);
        self.lines = result.lines;
        self.score = result.score;
        self.level = result.level;
        self.drop_interval_ms = result.drop_interval_ms;

        debug!(
            rows = ?cleared_rows.as_slice(),
            awarded = result.awarded,
            lines = self.lines,
            level = self.level,
            "lines cleared"
        );
        cleared
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Only a running, unpaused session accumulates time. Once the accumulator reaches
    /// the drop interval the piece moves down one row, or locks if it cannot; the
    /// accumulator then restarts from zero either way. Returns `true` on a gravity step.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running || self.paused || self.game_over {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        self.drop_timer_ms = 0;
        true
    }

    /// Flip the pause flag. Only a running session can pause or resume.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Apply a game action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        trace!(action = action.as_str(), "apply action");
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                let acted = self.can_control();
                self.hard_drop();
                acted
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
