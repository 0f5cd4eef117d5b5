//! Deck module - validated pair symbols and shuffled deals
//!
//! A deck holds `P` distinct symbols. Dealing duplicates each symbol and
//! shuffles the resulting `2P` cards with any `rand` RNG: `rand::rng()` for
//! play, a seeded `StdRng` for reproducible deals.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{MatchError, Result};
use crate::types::{default_symbols, Symbol};

/// The distinct symbols a game is dealt from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pair_symbols: Vec<Symbol>,
}

impl Deck {
    /// Validate `pair_symbols` against the expected pair count.
    ///
    /// Fails with [`MatchError::InvalidConfig`] when the list is empty, has
    /// the wrong length, or contains duplicates.
    pub fn new(pair_symbols: Vec<Symbol>, expected_pairs: usize) -> Result<Self> {
        if expected_pairs == 0 {
            return Err(MatchError::invalid_config("pair count must be at least 1"));
        }
        if pair_symbols.len() != expected_pairs {
            return Err(MatchError::invalid_config(format!(
                "expected {} pair symbols, got {}",
                expected_pairs,
                pair_symbols.len()
            )));
        }

        let mut seen = HashSet::with_capacity(pair_symbols.len());
        for symbol in &pair_symbols {
            if !seen.insert(symbol) {
                return Err(MatchError::invalid_config(format!(
                    "duplicate pair symbol {symbol:?}"
                )));
            }
        }

        Ok(Self { pair_symbols })
    }

    /// The standard 8-symbol deck.
    pub fn standard() -> Self {
        Self {
            pair_symbols: default_symbols(),
        }
    }

    pub fn pair_count(&self) -> usize {
        self.pair_symbols.len()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.pair_symbols
    }

    /// Deal every symbol twice in a uniformly random order.
    pub fn new_shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Symbol> {
        let mut cards: Vec<Symbol> = self
            .pair_symbols
            .iter()
            .flat_map(|s| [s.clone(), s.clone()])
            .collect();
        cards.shuffle(rng);
        debug!(cards = cards.len(), "dealt shuffled deck");
        cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Validate `pair_symbols` and deal them in one step.
pub fn new_shuffled<R: Rng + ?Sized>(
    pair_symbols: Vec<Symbol>,
    expected_pairs: usize,
    rng: &mut R,
) -> Result<Vec<Symbol>> {
    Ok(Deck::new(pair_symbols, expected_pairs)?.new_shuffled(rng))
}

/// Check that `cards` holds every symbol exactly twice.
///
/// Returns the number of pairs.
pub fn validate_pairing(cards: &[Symbol]) -> Result<usize> {
    if cards.is_empty() {
        return Err(MatchError::invalid_config("board must not be empty"));
    }
    if cards.len() % 2 != 0 {
        return Err(MatchError::invalid_config(format!(
            "board has an odd number of cards ({})",
            cards.len()
        )));
    }

    let mut counts: HashMap<&Symbol, usize> = HashMap::with_capacity(cards.len() / 2);
    for symbol in cards {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    if let Some((symbol, count)) = counts.iter().find(|(_, count)| **count != 2) {
        return Err(MatchError::invalid_config(format!(
            "symbol {symbol:?} appears {count} times, expected 2"
        )));
    }

    Ok(cards.len() / 2)
}
