use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::evaluator::{self, Score};
use std::collections::BTreeMap;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("invalid index: cannot discard {0} cards, at most {max}", max = Hand::MAX_DISCARDS)]
    TooManyDiscards(usize),
    #[error("invalid index: {0} is outside 0..=4")]
    IndexOutOfRange(usize),
    #[error("invalid position '{0}': expected a card number from 1 to 5")]
    InvalidPosition(String),
    #[error("deck has no cards left in either pile")]
    DeckExhausted,
}

impl HandError {
    /// True for the errors a discard request is rejected with before any card moves.
    pub fn is_invalid_index(&self) -> bool {
        matches!(
            self,
            HandError::TooManyDiscards(_)
                | HandError::IndexOutOfRange(_)
                | HandError::InvalidPosition(_)
        )
    }
}

/// Five cards held by the player for one draw round.
///
/// ```
/// use draw_poker::deck::Deck;
/// use draw_poker::hand::Hand;
///
/// let mut deck = Deck::seeded(9);
/// let mut hand = Hand::deal(&mut deck).unwrap();
/// hand.discard(&[0, 2], &mut deck).unwrap();
/// let score = hand.score(&mut deck);
/// assert_eq!(score.cards.len(), 5);
/// assert_eq!(deck.total(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
    drawn: bool,
}

impl Hand {
    pub const SIZE: usize = 5;
    pub const MAX_DISCARDS: usize = 4;

    /// Draw five cards from `deck`, stored in draw order.
    pub fn deal(deck: &mut Deck) -> Result<Self, HandError> {
        let mut drawn = Vec::with_capacity(Self::SIZE);
        for _ in 0..Self::SIZE {
            match deck.draw() {
                Some(card) => drawn.push(card),
                None => {
                    // hand back what we took so the deck stays whole
                    for card in drawn {
                        deck.discard(card);
                    }
                    return Err(HandError::DeckExhausted);
                }
            }
        }
        let cards: [Card; 5] = drawn.try_into().map_err(|_| HandError::DeckExhausted)?;
        let hand = Self::from_cards(cards);
        log::debug!("dealt {hand}");
        Ok(hand)
    }

    /// Wrap known cards, e.g. to evaluate a fixed hand. The caller owns uniqueness.
    pub const fn from_cards(cards: [Card; 5]) -> Self {
        Self { cards, drawn: false }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// True once a discard round replaced at least one card.
    pub fn has_drawn(&self) -> bool {
        self.drawn
    }

    /// Replace the cards at `indices` with fresh draws from `deck`.
    ///
    /// Up to four positions in 0..=4 may be given; an empty slice keeps all five.
    /// The request is validated before any card moves, so a rejected call
    /// leaves both the hand and the deck untouched. Duplicate positions are
    /// redrawn once per occurrence.
    pub fn discard(&mut self, indices: &[usize], deck: &mut Deck) -> Result<(), HandError> {
        if indices.len() > Self::MAX_DISCARDS {
            return Err(HandError::TooManyDiscards(indices.len()));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= Self::SIZE) {
            return Err(HandError::IndexOutOfRange(bad));
        }
        if indices.is_empty() {
            return Ok(());
        }

        for &i in indices {
            deck.discard(self.cards[i]);
            // the card just discarded guarantees something to draw
            self.cards[i] = deck.draw().ok_or(HandError::DeckExhausted)?;
        }
        self.drawn = true;
        log::debug!("redrew positions {indices:?}: {self}");
        Ok(())
    }

    /// Classify the final five cards and release them all to `deck`'s discard pile.
    pub fn score(self, deck: &mut Deck) -> Score {
        let category = evaluator::evaluate_five(&self.cards);
        for card in self.cards {
            deck.discard(card);
        }
        log::info!("scored {self}: {category}");
        Score { cards: self.cards, category }
    }

    pub fn is_flush(&self) -> bool {
        evaluator::is_flush(&self.cards)
    }

    pub fn histogram(&self) -> BTreeMap<Rank, u8> {
        evaluator::histogram(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hand: ")?;
        for c in &self.cards {
            write!(f, "|{c}")?;
        }
        f.write_str("|")
    }
}

/// Convert 1-based card numbers typed by a player ("1 3, 5") into 0-based indices.
///
/// Blank input means keep all five. Range and count limits are left to
/// [`Hand::discard`].
///
/// ```
/// use draw_poker::hand::parse_positions;
///
/// assert_eq!(parse_positions("1 3,5").unwrap(), vec![0, 2, 4]);
/// assert!(parse_positions("").unwrap().is_empty());
/// assert!(parse_positions("0").is_err());
/// ```
pub fn parse_positions(input: &str) -> Result<Vec<usize>, HandError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(n) if (1..=Hand::SIZE).contains(&n) => Ok(n - 1),
            _ => Err(HandError::InvalidPosition(s.to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::Category;

    fn fixed(s: &str) -> Hand {
        Hand::from_cards(parse_cards(s).unwrap().try_into().unwrap())
    }

    #[test]
    fn deal_takes_five_from_the_deck() {
        let mut deck = Deck::seeded(1);
        let top: Vec<Card> = deck.draw_pile().iter().rev().take(5).copied().collect();
        let hand = Hand::deal(&mut deck).unwrap();
        assert_eq!(hand.cards().to_vec(), top);
        assert_eq!(deck.len(), 47);
        assert!(!hand.has_drawn());
    }

    #[test]
    fn deal_from_exhausted_deck_returns_cards() {
        let mut deck = Deck::seeded(1);
        for _ in 0..50 {
            deck.draw();
        }
        assert_eq!(Hand::deal(&mut deck), Err(HandError::DeckExhausted));
        assert_eq!(deck.total(), 2);
    }

    #[test]
    fn single_discard_replaces_slot() {
        let mut deck = Deck::seeded(2);
        let mut hand = Hand::deal(&mut deck).unwrap();
        let old = hand.cards()[1];
        hand.discard(&[1], &mut deck).unwrap();
        assert_eq!(deck.discard_pile(), &[old]);
        assert_ne!(hand.cards()[1], old);
        assert!(hand.has_drawn());
    }

    #[test]
    fn four_card_discard_replaces_all_four() {
        let mut deck = Deck::seeded(3);
        let mut hand = Hand::deal(&mut deck).unwrap();
        let old: Vec<Card> = hand.cards()[..4].to_vec();
        hand.discard(&[0, 1, 2, 3], &mut deck).unwrap();
        for c in &old {
            assert!(deck.discard_pile().contains(c));
            assert!(!hand.cards().contains(c));
        }
    }

    #[test]
    fn empty_discard_is_a_no_op() {
        let mut deck = Deck::seeded(4);
        let mut hand = Hand::deal(&mut deck).unwrap();
        let before = hand.clone();
        hand.discard(&[], &mut deck).unwrap();
        assert_eq!(hand, before);
        assert!(deck.discard_pile().is_empty());
        assert_eq!(deck.len(), 47);
    }

    #[test]
    fn invalid_requests_leave_state_untouched() {
        let mut deck = Deck::seeded(5);
        let mut hand = Hand::deal(&mut deck).unwrap();
        let before = hand.clone();

        let err = hand.discard(&[0, 1, 2, 3, 4], &mut deck).unwrap_err();
        assert_eq!(err, HandError::TooManyDiscards(5));
        assert!(err.is_invalid_index());

        let err = hand.discard(&[1, 7], &mut deck).unwrap_err();
        assert_eq!(err, HandError::IndexOutOfRange(7));
        assert!(err.is_invalid_index());

        assert_eq!(hand, before);
        assert_eq!(deck.len(), 47);
        assert!(deck.discard_pile().is_empty());
    }

    #[test]
    fn score_releases_all_cards_in_hand_order() {
        let mut deck = Deck::seeded(6);
        let hand = Hand::deal(&mut deck).unwrap();
        let cards = *hand.cards();
        let score = hand.score(&mut deck);
        assert_eq!(score.cards, cards);
        assert_eq!(deck.discard_pile(), &cards);
        assert_eq!(deck.total(), 52);
    }

    #[test]
    fn score_of_fixed_hand() {
        let mut deck = Deck::seeded(7);
        let score = fixed("Jh Qd 5c 7s 10s").score(&mut deck);
        assert_eq!(score.category_label(), "High Card:Q\u{2666}");
        assert_eq!(deck.discard_pile().len(), 5);
    }

    #[test]
    fn hand_helpers() {
        let hand = fixed("6s 2s Qs Ks 9s");
        assert!(hand.is_flush());
        assert_eq!(hand.histogram().len(), 5);
        assert_eq!(evaluator::evaluate_five(hand.cards()), Category::HighCard(hand.cards()[3]));
        assert_eq!(hand.to_string(), "Hand: |6\u{2660}|2\u{2660}|Q\u{2660}|K\u{2660}|9\u{2660}|");
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_positions("2, 3").unwrap(), vec![1, 2]);
        assert_eq!(parse_positions("  ").unwrap(), Vec::<usize>::new());
        assert!(matches!(parse_positions("6"), Err(HandError::InvalidPosition(_))));
        assert!(matches!(parse_positions("-2"), Err(HandError::InvalidPosition(_))));
        assert!(matches!(parse_positions("x"), Err(HandError::InvalidPosition(_))));
    }
}
