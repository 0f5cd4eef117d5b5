//! Environment-driven configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MATCH_SYMBOLS` | the 8 default glyphs | Comma-separated pair symbols |
//! | `MATCH_PAIRS` | 8 | Expected pair count |
//! | `MATCH_SEED` | unset | Fixed `u64` shuffle seed (`rand::rng()` per game when unset) |
//! | `MATCH_COLUMNS` | 4 | Cards per grid row |
//! | `MATCH_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `MATCH_LOG_LEVEL` | `info` | `tracing` filter directive |

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{Deck, Result};
use crate::types::{default_symbols, Symbol, DEFAULT_COLUMNS, DEFAULT_PAIR_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub symbols: Vec<Symbol>,
    pub pair_count: usize,
    pub seed: Option<u64>,
    pub columns: u16,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            pair_count: DEFAULT_PAIR_COUNT,
            seed: None,
            columns: DEFAULT_COLUMNS,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let symbols = non_empty("MATCH_SYMBOLS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(Symbol::from)
                    .collect()
            })
            .unwrap_or(defaults.symbols);

        let pair_count = non_empty("MATCH_PAIRS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.pair_count);

        let seed = non_empty("MATCH_SEED").and_then(|s| s.parse().ok());

        let columns = non_empty("MATCH_COLUMNS")
            .and_then(|s| s.parse().ok())
            .filter(|&c: &u16| c > 0)
            .unwrap_or(defaults.columns);

        let log_path = non_empty("MATCH_LOG_PATH").map(PathBuf::from);
        let log_level = non_empty("MATCH_LOG_LEVEL").unwrap_or(defaults.log_level);

        Self {
            symbols,
            pair_count,
            seed,
            columns,
            log_path,
            log_level,
        }
    }

    /// Validate the configured symbols into a deck.
    pub fn deck(&self) -> Result<Deck> {
        Deck::new(self.symbols.clone(), self.pair_count)
    }

    /// The configured fixed-seed RNG, if any.
    pub fn fixed_rng(&self) -> Option<StdRng> {
        self.seed.map(StdRng::seed_from_u64)
    }
}
