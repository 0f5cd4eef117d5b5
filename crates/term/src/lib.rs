//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` free of any rendering concern
//! - Share one layout between drawing and mouse hit-testing
//! - Handle double-width emoji card faces

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, WIDE_TAIL};
pub use game_view::{status_text, AnchorY, GameView, Hit, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
