use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A 52-card deck split into a draw pile and a discard pile.
///
/// Cards are never created or destroyed after construction: they move between
/// the two piles and whatever hands are currently holding them.
#[derive(Debug, Clone)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Shuffled deck seeded from the thread RNG.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert!(deck.discard_pile().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Shuffled deck whose initial order and every later reshuffle are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Shuffled deck seeded from the provided RNG.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(rng))
    }

    fn with_rng(mut rng: ChaCha8Rng) -> Self {
        let mut draw_pile = Self::ordered();
        draw_pile.shuffle(&mut rng);
        Self { draw_pile, discard_pile: Vec::new(), rng }
    }

    /// All 52 cards in rank-major order, unshuffled.
    pub fn ordered() -> Vec<Card> {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for &r in &Rank::ALL {
            for &s in &Suit::ALL {
                cards.push(Card::new(r, s));
            }
        }
        cards
    }

    /// Cards left to draw.
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Cards held by the deck across both piles.
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Draw one card from the top of the draw pile.
    ///
    /// An empty draw pile is refilled from the discard pile and reshuffled first.
    /// Returns `None` only when both piles are empty, which means more cards are
    /// out in hands than the deck can supply.
    pub fn draw(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            self.reshuffle();
        }
        self.draw_pile.pop()
    }

    /// Return a card to the deck. It always lands on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    fn reshuffle(&mut self) {
        log::debug!("reshuffling {} discarded cards into the draw pile", self.discard_pile.len());
        self.draw_pile.append(&mut self.discard_pile);
        self.draw_pile.shuffle(&mut self.rng);
    }
}
