//! App controller: the glue between raw input and the game session.
//!
//! The binary forwards key presses, mouse clicks and timer ticks here; the
//! controller turns them into session transitions and enforces the host-side
//! rules (ticks only while the timer runs, restart only after completion).

use rand::rngs::StdRng;
use tracing::debug;

use crate::config::GameConfig;
use crate::core::{Deck, GameSession, Result};
use crate::input::Cursor;
use crate::types::{format_status, GameAction, Position, SelectOutcome, Symbol};

/// Where each game's shuffle comes from.
#[derive(Debug, Clone)]
enum DealRng {
    /// One seeded generator reused for every game (reproducible runs).
    Fixed(StdRng),
    /// The thread-local OS-seeded generator, drawn from per game.
    Entropy,
}

#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    deck: Deck,
    rng: DealRng,
    cursor: Cursor,
}

impl App {
    /// Start a game from `deck`. With `rng = None` every deal draws from
    /// `rand::rng()`.
    ///
    /// `columns` is capped at the board length.
    pub fn new(deck: Deck, rng: Option<StdRng>, columns: u16) -> Result<Self> {
        let mut rng = match rng {
            Some(rng) => DealRng::Fixed(rng),
            None => DealRng::Entropy,
        };
        let session = GameSession::new(deal(&deck, &mut rng))?;
        let max_columns = u16::try_from(session.len()).unwrap_or(u16::MAX);
        let cursor = Cursor::new(columns.min(max_columns), session.len());
        Ok(Self {
            session,
            deck,
            rng,
            cursor,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.deck()?, config.fixed_rng(), config.columns)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Apply a keyboard action.
    ///
    /// Returns the select outcome when a card was actually picked.
    pub fn handle_action(&mut self, action: GameAction) -> Result<Option<SelectOutcome>> {
        match action {
            GameAction::MoveUp
            | GameAction::MoveDown
            | GameAction::MoveLeft
            | GameAction::MoveRight => {
                self.cursor.apply(action);
                Ok(None)
            }
            GameAction::Select => self.pick(self.cursor.position()),
            GameAction::Restart => {
                self.restart_if_completed()?;
                Ok(None)
            }
        }
    }

    /// A mouse click on a card: move the cursor there and pick it.
    pub fn click_card(&mut self, position: Position) -> Result<Option<SelectOutcome>> {
        self.cursor.set(position);
        self.pick(position)
    }

    /// A click on the time line. Restarts a finished game.
    pub fn click_status(&mut self) -> Result<bool> {
        self.restart_if_completed()
    }

    /// Deliver one timer tick if the timer is running.
    pub fn on_tick(&mut self) -> Result<bool> {
        if !self.session.running() {
            return Ok(false);
        }
        self.session.tick()?;
        Ok(true)
    }

    pub fn status_text(&self) -> String {
        format_status(self.session.elapsed_tenths(), self.session.is_completed())
    }

    fn pick(&mut self, position: Position) -> Result<Option<SelectOutcome>> {
        match self.session.select(position) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(err) if err.is_benign() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn restart_if_completed(&mut self) -> Result<bool> {
        if !self.session.is_completed() {
            debug!(
                matches = self.session.matches_found(),
                "restart ignored before completion"
            );
            return Ok(false);
        }
        let cards = deal(&self.deck, &mut self.rng);
        self.session.restart(cards)?;
        self.cursor.reset(self.session.len());
        Ok(true)
    }
}

fn deal(deck: &Deck, rng: &mut DealRng) -> Vec<Symbol> {
    match rng {
        DealRng::Fixed(rng) => deck.new_shuffled(rng),
        DealRng::Entropy => deck.new_shuffled(&mut rand::rng()),
    }
}
