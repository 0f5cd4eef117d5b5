//! Terminal input module.
//!
//! This module is independent of any game logic. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and tracks a keyboard cursor over
//! the card grid. Mouse clicks are hit-tested by the view, which knows the
//! layout.

pub mod cursor;
pub mod map;

pub use memory_match_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, left_click_at, should_quit};
