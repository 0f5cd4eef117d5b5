//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the card deck, the session state machine, and the
//! snapshot consumed by renderers. It has **no dependencies** on UI, timers,
//! or I/O, making it:
//!
//! - **Deterministic**: A seeded RNG produces the same deal
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Any host can drive it (terminal, GUI, headless test)
//!
//! # Module Structure
//!
//! - [`deck`]: Validated pair symbols and shuffled deals
//! - [`session`]: Board state, pending pick, matches, elapsed time
//! - [`snapshot`]: Plain-data view of a session for rendering
//! - [`error`]: Caller-contract violations
//!
//! # Game Rules
//!
//! - Every card starts covered (`visible = true` means the cover is shown)
//! - The first pick uncovers a card and makes it pending
//! - A second pick with the same symbol keeps both uncovered for good
//! - A second pick with a different symbol covers the pending card again
//! - Finding the last pair stops the timer
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Deck, GameSession};
//! use memory_match_types::{Position, SelectOutcome};
//!
//! let deck = Deck::standard();
//! let mut rng = rand::rng();
//! let mut game = GameSession::new(deck.new_shuffled(&mut rng)).unwrap();
//!
//! assert_eq!(game.select(Position::new(0)).unwrap(), SelectOutcome::FirstPick);
//! game.tick().unwrap();
//! assert_eq!(game.elapsed_tenths(), 1);
//! ```
//!
//! # Timing
//!
//! The session does not own a timer. The host calls
//! [`GameSession::tick`](session::GameSession::tick) every
//! [`TICK_MS`](memory_match_types::TICK_MS) while
//! [`running`](session::GameSession::running) is true.

pub mod deck;
pub mod error;
pub mod session;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use deck::{new_shuffled, validate_pairing, Deck};
pub use error::{MatchError, Result};
pub use session::{CardState, GameSession};
pub use snapshot::SessionSnapshot;
