use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("position {position} is out of range for a board of {len} cards")]
    InvalidPosition { position: usize, len: usize },
    #[error("position {position} is already revealed")]
    AlreadyRevealed { position: usize },
    #[error("timer is not running")]
    NotRunning,
    #[error("game is not completed ({matches_found}/{pair_count} pairs found)")]
    NotCompleted {
        matches_found: usize,
        pair_count: usize,
    },
}

impl MatchError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Benign conditions the host may silently ignore.
    pub fn is_benign(&self) -> bool {
        matches!(self, MatchError::AlreadyRevealed { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
