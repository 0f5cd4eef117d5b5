use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::session::CardState;
use crate::types::Position;

/// Plain-data copy of a session, cheap to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub cards: Vec<CardState>,
    pub pending_selection: Option<Position>,
    pub matches_found: usize,
    pub pair_count: usize,
    pub elapsed_tenths: u32,
    pub running: bool,
    pub episode_id: u32,
}

impl SessionSnapshot {
    pub fn completed(&self) -> bool {
        self.pair_count > 0 && self.matches_found == self.pair_count
    }

    /// Hash of everything visible on screen (used to skip identical frames).
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn test_fingerprint_tracks_changes() {
        let mut snap = SessionSnapshot {
            cards: vec![CardState::new(Symbol::new("A"))],
            pair_count: 1,
            running: true,
            ..SessionSnapshot::default()
        };
        let before = snap.fingerprint();
        assert_eq!(before, snap.clone().fingerprint());

        snap.elapsed_tenths += 1;
        assert_ne!(before, snap.fingerprint());
    }

    #[test]
    fn test_completed_requires_pairs() {
        let mut snap = SessionSnapshot::default();
        assert!(!snap.completed());
        snap.pair_count = 2;
        snap.matches_found = 2;
        assert!(snap.completed());
        snap.matches_found = 1;
        assert!(!snap.completed());
    }
}
