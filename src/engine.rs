// Engine API boundary. The free functions are the deck/hand contract a session
// layer calls; the `PokerEngine` trait is what front-ends (TUI, services) drive
// so they never touch decks or hands directly. It is implemented for
// `SessionRegistry`.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::Score;
use crate::hand::{Hand, HandError};
use crate::session::{SessionError, SessionId, SessionRegistry};

/// A freshly shuffled 52-card deck.
pub fn create_deck() -> Deck {
    Deck::new()
}

/// Deal five cards from `deck`.
pub fn deal_hand(deck: &mut Deck) -> Result<Hand, HandError> {
    Hand::deal(deck)
}

/// Replace the cards at `indices` (0-based, at most four).
pub fn discard_and_redraw(
    hand: &mut Hand,
    indices: &[usize],
    deck: &mut Deck,
) -> Result<(), HandError> {
    hand.discard(indices, deck)
}

/// Classify `hand` and release its cards back to `deck`.
pub fn evaluate(hand: Hand, deck: &mut Deck) -> Score {
    hand.score(deck)
}

pub trait PokerEngine {
    // Session lifecycle
    fn open(&mut self) -> SessionId;
    fn close(&mut self, id: SessionId) -> Result<(), SessionError>;

    // Round actions
    fn deal(&mut self, id: SessionId) -> Result<[Card; 5], SessionError>;
    fn discard(&mut self, id: SessionId, indices: &[usize]) -> Result<[Card; 5], SessionError>;
    fn score(&mut self, id: SessionId, indices: &[usize]) -> Result<Score, SessionError>;

    // Queries
    fn hand(&self, id: SessionId) -> Option<[Card; 5]>;
    fn cards_left(&self, id: SessionId) -> Option<usize>;
}

impl PokerEngine for SessionRegistry {
    fn open(&mut self) -> SessionId {
        self.new_session()
    }
    fn close(&mut self, id: SessionId) -> Result<(), SessionError> {
        self.end_session(id)
    }

    fn deal(&mut self, id: SessionId) -> Result<[Card; 5], SessionError> {
        SessionRegistry::deal(self, id)
    }
    fn discard(&mut self, id: SessionId, indices: &[usize]) -> Result<[Card; 5], SessionError> {
        SessionRegistry::discard(self, id, indices)
    }
    fn score(&mut self, id: SessionId, indices: &[usize]) -> Result<Score, SessionError> {
        SessionRegistry::score(self, id, indices)
    }

    fn hand(&self, id: SessionId) -> Option<[Card; 5]> {
        self.get(id).and_then(|s| s.hand()).map(|h| *h.cards())
    }
    fn cards_left(&self, id: SessionId) -> Option<usize> {
        self.get(id).map(|s| s.deck().len())
    }
}
