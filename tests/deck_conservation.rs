use draw_poker::cards::Card;
use draw_poker::deck::Deck;
use draw_poker::hand::Hand;
use proptest::prelude::*;
use std::collections::HashSet;

fn assert_whole(deck: &Deck, hands: &[&Hand]) {
    let mut all: Vec<Card> = deck.draw_pile().to_vec();
    all.extend_from_slice(deck.discard_pile());
    for h in hands {
        all.extend_from_slice(h.cards());
    }
    assert_eq!(all.len(), 52);
    let set: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(set.len(), 52);
    let full: HashSet<Card> = Deck::ordered().into_iter().collect();
    assert_eq!(set, full);
}

#[test]
fn fresh_deck_is_the_full_set() {
    let deck = Deck::new();
    assert_whole(&deck, &[]);
    assert!(deck.discard_pile().is_empty());
}

#[test]
fn reshuffle_moves_discards_back() {
    let mut deck = Deck::seeded(8);
    let mut held = Vec::new();
    for _ in 0..52 {
        held.push(deck.draw().unwrap());
    }
    for c in held.drain(..10) {
        deck.discard(c);
    }
    assert!(deck.is_empty());
    let _c = deck.draw().unwrap();
    assert!(deck.discard_pile().is_empty());
    assert_eq!(deck.len(), 9);
}

#[test]
fn many_rounds_never_lose_a_card() {
    let mut deck = Deck::seeded(99);
    for round in 0..500 {
        let mut hand = Hand::deal(&mut deck).unwrap();
        let positions: Vec<usize> = (0..(round % 5)).collect();
        hand.discard(&positions, &mut deck).unwrap();
        assert_whole(&deck, &[&hand]);
        hand.score(&mut deck);
        assert_whole(&deck, &[]);
    }
}

#[test]
fn repeated_position_redraws_once_per_occurrence() {
    let mut deck = Deck::seeded(5);
    let mut hand = Hand::deal(&mut deck).unwrap();
    let first = hand.cards()[1];
    hand.discard(&[1, 1, 1, 1], &mut deck).unwrap();
    assert_eq!(hand.cards().len(), 5);
    assert_eq!(deck.discard_pile().len(), 4);
    assert_eq!(deck.discard_pile()[0], first);
    assert_eq!(deck.len(), 43);
    assert_whole(&deck, &[&hand]);
}

fn positions() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..5, 0..=4).prop_map(|mut v| {
        v.sort_unstable();
        v.dedup();
        v
    })
}

proptest! {
    #[test]
    fn rounds_preserve_the_card_set(seed in any::<u64>(), rounds in prop::collection::vec(positions(), 1..40)) {
        let mut deck = Deck::seeded(seed);
        for pos in rounds {
            let mut hand = Hand::deal(&mut deck).unwrap();
            hand.discard(&pos, &mut deck).unwrap();
            prop_assert_eq!(hand.cards().len(), 5);
            assert_whole(&deck, &[&hand]);
            let score = hand.score(&mut deck);
            prop_assert_eq!(score.cards.len(), 5);
            assert_whole(&deck, &[]);
        }
    }

    #[test]
    fn repeated_positions_preserve_the_card_set(seed in any::<u64>(), pos in prop::collection::vec(0usize..5, 0..=4)) {
        let mut deck = Deck::seeded(seed);
        let mut hand = Hand::deal(&mut deck).unwrap();
        hand.discard(&pos, &mut deck).unwrap();
        prop_assert_eq!(deck.discard_pile().len(), pos.len());
        assert_whole(&deck, &[&hand]);
        hand.score(&mut deck);
        assert_whole(&deck, &[]);
    }

    #[test]
    fn two_hands_out_at_once(seed in any::<u64>(), a in positions(), b in positions()) {
        let mut deck = Deck::seeded(seed);
        let mut h1 = Hand::deal(&mut deck).unwrap();
        let mut h2 = Hand::deal(&mut deck).unwrap();
        h1.discard(&a, &mut deck).unwrap();
        h2.discard(&b, &mut deck).unwrap();
        assert_whole(&deck, &[&h1, &h2]);
    }

    #[test]
    fn invalid_positions_never_move_cards(seed in any::<u64>(), bad in 5usize..100) {
        let mut deck = Deck::seeded(seed);
        let mut hand = Hand::deal(&mut deck).unwrap();
        let before = hand.clone();
        let err = hand.discard(&[0, bad], &mut deck).unwrap_err();
        prop_assert!(err.is_invalid_index());
        prop_assert_eq!(hand, before);
        prop_assert_eq!(deck.len(), 47);
        prop_assert!(deck.discard_pile().is_empty());
    }
}
