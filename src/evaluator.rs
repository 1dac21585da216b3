use crate::cards::{Card, Rank};
use std::collections::BTreeMap;
use std::fmt;

/// Five-card draw result category.
///
/// Hands with five distinct ranks that are neither straights nor straight
/// flushes score as [`Category::AceHigh`] or [`Category::HighCard`]; there is no
/// separate flush payout in this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Category {
    /// Highest card, carried for display. Never an Ace.
    HighCard(Card),
    AceHigh,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    /// Strength order, weakest first. High card hands share one ordinal.
    pub const fn ordinal(self) -> u8 {
        match self {
            Category::HighCard(_) => 0,
            Category::AceHigh => 1,
            Category::OnePair => 2,
            Category::TwoPair => 3,
            Category::ThreeOfAKind => 4,
            Category::Straight => 5,
            Category::FullHouse => 6,
            Category::FourOfAKind => 7,
            Category::StraightFlush => 8,
            Category::RoyalFlush => 9,
        }
    }

    /// Short name without the high card suffix; used for tallies.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard(_) => "High Card",
            Category::AceHigh => "Ace High",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Result text shown to the player, e.g. "Full House" or "High Card:Q♦".
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::HighCard(card) => write!(f, "High Card:{card}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Final cards of a round together with their classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub cards: [Card; 5],
    pub category: Category,
}

impl Score {
    pub fn category_label(&self) -> String {
        self.category.label()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cards {
            write!(f, "|{c}")?;
        }
        write!(f, "| {}", self.category)
    }
}

/// Count of cards per rank, built in a single pass.
pub fn histogram(cards: &[Card; 5]) -> BTreeMap<Rank, u8> {
    let mut counts = BTreeMap::new();
    for c in cards {
        *counts.entry(c.rank()).or_insert(0) += 1;
    }
    counts
}

/// True iff every card shares the suit of the first.
pub fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

/// Straight test over five cards already sorted ascending with distinct ranks.
///
/// The wheel (A-2-3-4-5, Ace low) and the consecutive run are kept as separate checks.
fn is_straight_sorted(sorted: &[Card; 5]) -> bool {
    let low = sorted[0].rank();
    let high = sorted[4].rank();
    if low == Rank::Two && high == Rank::Ace && sorted[3].rank() == Rank::Five {
        return true;
    }
    high.value() - low.value() == 4
}

/// True iff the five cards have distinct ranks forming a straight (wheel included).
pub fn is_straight(cards: &[Card; 5]) -> bool {
    histogram(cards).len() == 5 && is_straight_sorted(&sorted(cards))
}

fn sorted(cards: &[Card; 5]) -> [Card; 5] {
    let mut out = *cards;
    // slice::sort_by is stable
    out.sort_by(Card::compare);
    out
}

/// Classify exactly five cards.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::{evaluate_five, Category};
///
/// let cards: [_; 5] = parse_cards("2s 3h 4d 5c Ad").unwrap().try_into().unwrap();
/// assert_eq!(evaluate_five(&cards), Category::Straight);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Category {
    let counts = histogram(cards);
    let largest = counts.values().copied().max().unwrap_or(0);

    match counts.len() {
        2 if largest == 4 => Category::FourOfAKind,
        2 => Category::FullHouse,
        3 if largest == 3 => Category::ThreeOfAKind,
        3 => Category::TwoPair,
        4 => Category::OnePair,
        _ => {
            let sorted = sorted(cards);
            let flush = is_flush(cards);
            let straight = is_straight_sorted(&sorted);
            let (lowest, highest) = (sorted[0], sorted[4]);

            if straight && flush && lowest.rank() == Rank::Ten {
                Category::RoyalFlush
            } else if straight && flush {
                Category::StraightFlush
            } else if straight {
                Category::Straight
            } else if highest.rank() == Rank::Ace {
                Category::AceHigh
            } else {
                Category::HighCard(highest)
            }
        }
    }
}
