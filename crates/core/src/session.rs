//! Session module - the matching state machine
//!
//! A session owns the board (one [`CardState`] per position), the pending
//! first pick, the match count, and the elapsed-time counter. It exposes the
//! transitions a host calls in response to clicks and timer ticks.
//!
//! Visibility is inverted from the intuitive reading: `visible == true` means the card
//! cover is shown and the card is still in play; `visible == false` means the
//! symbol is revealed.

use tracing::{debug, info, trace};

use crate::deck::validate_pairing;
use crate::error::{MatchError, Result};
use crate::snapshot::SessionSnapshot;
use crate::types::{Position, SelectOutcome, Symbol};

/// One card slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardState {
    pub symbol: Symbol,
    /// Cover shown (still in play) when true; symbol revealed when false.
    pub visible: bool,
}

impl CardState {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            visible: true,
        }
    }

    pub fn is_revealed(&self) -> bool {
        !self.visible
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Vec<CardState>,
    pending_selection: Option<Position>,
    matches_found: usize,
    pair_count: usize,
    elapsed_tenths: u32,
    running: bool,
    /// Monotonic game id (increments on every start).
    episode_id: u32,
}

impl GameSession {
    /// Create a session and start it with `shuffled`.
    pub fn new(shuffled: Vec<Symbol>) -> Result<Self> {
        let pair_count = validate_pairing(&shuffled)?;
        let mut session = Self {
            board: Vec::new(),
            pending_selection: None,
            matches_found: 0,
            pair_count,
            elapsed_tenths: 0,
            running: false,
            episode_id: 0,
        };
        session.reset(shuffled, pair_count);
        Ok(session)
    }

    /// Deal `shuffled` onto the board and restart the timer.
    ///
    /// Fails with [`MatchError::InvalidConfig`] (leaving the session
    /// untouched) unless every symbol appears exactly twice.
    pub fn start(&mut self, shuffled: Vec<Symbol>) -> Result<()> {
        let pair_count = validate_pairing(&shuffled)?;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.reset(shuffled, pair_count);
        Ok(())
    }

    /// Start a new game once every pair has been found.
    pub fn restart(&mut self, shuffled: Vec<Symbol>) -> Result<()> {
        if !self.is_completed() {
            return Err(MatchError::NotCompleted {
                matches_found: self.matches_found,
                pair_count: self.pair_count,
            });
        }
        self.start(shuffled)
    }

    fn reset(&mut self, shuffled: Vec<Symbol>, pair_count: usize) {
        self.board.clear();
        self.board.extend(shuffled.into_iter().map(CardState::new));
        self.pending_selection = None;
        self.matches_found = 0;
        self.pair_count = pair_count;
        self.elapsed_tenths = 0;
        self.running = true;
        debug!(
            episode = self.episode_id,
            cards = self.board.len(),
            "game started"
        );
    }

    /// Advance the timer by one tenth of a second.
    ///
    /// Only valid while [`running`](Self::running); the host stops calling
    /// this once a `select` reports completion.
    pub fn tick(&mut self) -> Result<()> {
        if !self.running {
            return Err(MatchError::NotRunning);
        }
        self.elapsed_tenths = self.elapsed_tenths.saturating_add(1);
        Ok(())
    }

    /// Pick the card at `position`.
    ///
    /// Only covered cards can be picked. Uncovered ones (matched pairs and the
    /// pending card itself) fail with [`MatchError::AlreadyRevealed`] and leave
    /// the session unchanged.
    pub fn select(&mut self, position: Position) -> Result<SelectOutcome> {
        let idx = position.index();
        let len = self.board.len();
        let card = self
            .board
            .get(idx)
            .ok_or(MatchError::InvalidPosition { position: idx, len })?;
        if card.is_revealed() {
            trace!(%position, "ignored pick of revealed card");
            return Err(MatchError::AlreadyRevealed { position: idx });
        }

        let Some(first) = self.pending_selection.take() else {
            self.board[idx].visible = false;
            self.pending_selection = Some(position);
            debug!(%position, "first pick");
            return Ok(SelectOutcome::FirstPick);
        };

        if self.board[first.index()].symbol == self.board[idx].symbol {
            self.board[idx].visible = false;
            self.matches_found += 1;
            let completed = self.matches_found == self.pair_count;
            debug!(%first, %position, matches = self.matches_found, "match");
            if completed {
                self.running = false;
                info!(
                    episode = self.episode_id,
                    elapsed_tenths = self.elapsed_tenths,
                    "all pairs found"
                );
            }
            Ok(SelectOutcome::Match { completed })
        } else {
            self.board[first.index()].visible = true;
            debug!(%first, %position, "no match");
            Ok(SelectOutcome::NoMatch)
        }
    }

    pub fn card(&self, position: Position) -> Option<&CardState> {
        self.board.get(position.index())
    }

    pub fn cards(&self) -> &[CardState] {
        &self.board
    }

    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn pending_selection(&self) -> Option<Position> {
        self.pending_selection
    }

    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn elapsed_tenths(&self) -> u32 {
        self.elapsed_tenths
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.matches_found == self.pair_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.cards.clone_from(&self.board);
        out.pending_selection = self.pending_selection;
        out.matches_found = self.matches_found;
        out.pair_count = self.pair_count;
        out.elapsed_tenths = self.elapsed_tenths;
        out.running = self.running;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
