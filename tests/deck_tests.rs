//! Deal properties over arbitrary symbol sets and seeds.

use std::collections::HashMap;

use memory_match::core::{validate_pairing, Deck, MatchError};
use memory_match::types::Symbol;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn numbered(pairs: usize) -> Vec<Symbol> {
    (0..pairs).map(|i| Symbol::new(format!("s{i}"))).collect()
}

proptest! {
    #[test]
    fn deal_pairs_every_symbol(pairs in 1usize..40, seed in any::<u64>()) {
        let deck = Deck::new(numbered(pairs), pairs).unwrap();
        let cards = deck.new_shuffled(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(cards.len(), 2 * pairs);
        let mut counts: HashMap<&Symbol, usize> = HashMap::new();
        for card in &cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert_eq!(validate_pairing(&cards), Ok(pairs));
    }

    #[test]
    fn wrong_pair_count_is_rejected(pairs in 1usize..20, expected in 1usize..20) {
        prop_assume!(pairs != expected);
        let err = Deck::new(numbered(pairs), expected).unwrap_err();
        let is_invalid_config = matches!(err, MatchError::InvalidConfig { .. });
        prop_assert!(is_invalid_config);
    }
}

#[test]
fn duplicate_symbols_are_rejected() {
    let symbols = vec![Symbol::new("A"), Symbol::new("B"), Symbol::new("A")];
    assert!(matches!(
        Deck::new(symbols, 3),
        Err(MatchError::InvalidConfig { .. })
    ));
}

#[test]
fn shuffles_actually_reorder() {
    let deck = Deck::standard();
    let ordered: Vec<Symbol> = deck
        .symbols()
        .iter()
        .flat_map(|s| [s.clone(), s.clone()])
        .collect();

    let reordered = (1..20u64)
        .map(|seed| deck.new_shuffled(&mut StdRng::seed_from_u64(seed)))
        .filter(|cards| *cards != ordered)
        .count();
    assert!(reordered > 15);
}

#[test]
fn thread_rng_deals_differ() {
    let deck = Deck::standard();
    let deals: Vec<Vec<Symbol>> = (0..5)
        .map(|_| deck.new_shuffled(&mut rand::rng()))
        .collect();
    for cards in &deals {
        assert_eq!(validate_pairing(cards), Ok(deck.pair_count()));
    }
    assert!(deals.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn thread_rng_reaches_every_slot() {
    // Over many unseeded deals the first symbol lands in every position.
    let deck = Deck::standard();
    let first = deck.symbols()[0].clone();
    let mut seen = [false; 16];
    for _ in 0..2000 {
        let cards = deck.new_shuffled(&mut rand::rng());
        for (i, card) in cards.iter().enumerate() {
            if *card == first {
                seen[i] = true;
            }
        }
    }
    assert!(seen.iter().all(|&hit| hit));
}
