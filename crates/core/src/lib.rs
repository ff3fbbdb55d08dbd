//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Frame-rate independent**: gravity accumulates whatever elapsed time the caller passes
//!
//! # Module Structure
//!
//! - [`board`]: 13x20 (configurable) grid with collision detection and line clearing
//! - [`game_state`]: Complete session state including active/next piece, scoring, timing
//! - [`pieces`]: Static shape catalog with naive (kick-free) rotation
//! - [`rng`]: Uniform random piece generation
//! - [`scoring`]: Flat per-line scoring, levels and gravity curve
//! - [`snapshot`]: Owned read-only view for renderers
//! - [`config`]: Per-session board size and seed
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind equally likely on every draw
//! - **Naive rotation**: next rotation state at the same origin, rejected on collision
//! - **No lock delay**: a piece locks on the first gravity step it cannot take
//! - **Scoring**: `100 * level` per cleared line, +1 per soft drop row, +2 per hard drop row
//! - **Levels**: one level per 10 lines, starting at 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::seeded(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the elapsed
//! milliseconds. Gravity moves the piece once the accumulated time reaches the drop
//! interval (1000ms at level 1, 50ms less per level, never below 50ms).

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LockEvent, SessionPhase, Tetromino};
pub use pieces::{rotations, shape, Shape};
pub use rng::PieceGenerator;
pub use scoring::{calculate_drop_score, drop_interval_ms, level_for_lines, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
