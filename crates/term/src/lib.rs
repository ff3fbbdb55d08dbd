//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders a [`core::GameSnapshot`]
//! into a simple framebuffer that is flushed to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so frames can be asserted in tests
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{palette_color, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, ChangedRuns, Run, TerminalRenderer};
