//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core state machine, terminal rendering, input mapping).
//!
//! # Board
//!
//! The standard board holds 8 pairs (16 cards) laid out as a 4x4 grid.
//! Both the pair count and the symbol set are configuration, not constants
//! baked into the state machine.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Timer period; one tick is one tenth of a second |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{format_elapsed, GameAction, Position, Symbol};
//!
//! let a = Symbol::new("A");
//! assert_eq!(a, Symbol::new("A"));
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(Position::new(3).index(), 3);
//! assert_eq!(format_elapsed(123), "12.3s");
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Number of pairs on the standard board.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Default grid width in cards.
pub const DEFAULT_COLUMNS: u16 = 4;

/// Timer period in milliseconds (one tenth of a second).
pub const TICK_MS: u32 = 100;

/// Default card faces.
pub const DEFAULT_SYMBOLS: [&str; DEFAULT_PAIR_COUNT] =
    ["🎅", "🤴", "🧛", "🧙", "🎃", "🎄", "🎆", "💎"];

/// Appended to the elapsed time once every pair has been found.
pub const PLAY_AGAIN_SUFFIX: &str = " - Click to play again";

/// An opaque card face. Only equality matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Terminal column width of the glyph (at least 1).
    pub fn width(&self) -> u16 {
        (self.0.width() as u16).max(1)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The default symbol set as owned symbols.
pub fn default_symbols() -> Vec<Symbol> {
    DEFAULT_SYMBOLS.iter().copied().map(Symbol::from).collect()
}

/// Index of one card slot, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a successful `select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOutcome {
    /// The card was uncovered and is now pending.
    FirstPick,
    /// The card matched the pending one. `completed` is set on the last pair.
    Match { completed: bool },
    /// The card differed; the pending card was covered again.
    NoMatch,
}

impl SelectOutcome {
    pub fn completed(self) -> bool {
        matches!(self, SelectOutcome::Match { completed: true })
    }
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use memory_match_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("MOVEDOWN"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "select" => Some(GameAction::Select),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Select => "select",
            GameAction::Restart => "restart",
        }
    }
}

/// Format tenths of a second as seconds with one decimal place.
pub fn format_elapsed(tenths: u32) -> String {
    format!("{}.{}s", tenths / 10, tenths % 10)
}

/// Status line text: elapsed time, plus the play-again hint once completed.
pub fn format_status(tenths: u32, completed: bool) -> String {
    let mut text = format_elapsed(tenths);
    if completed {
        text.push_str(PLAY_AGAIN_SUFFIX);
    }
    text
}
