//! Memory Match (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` and adds the pieces
//! that tie them together for the terminal binary: configuration, logging,
//! and the [`App`](app::App) controller that forwards input to the session.

pub mod app;
pub mod config;
pub mod logging;

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub use app::App;
pub use config::GameConfig;
