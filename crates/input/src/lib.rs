//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s, one action per key,
//! and filters out everything but restart once the game is over.

pub mod map;

pub use blockfall_types as types;

pub use map::{accepts, action_for, handle_key_event, should_quit};
