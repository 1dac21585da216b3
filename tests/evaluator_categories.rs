use draw_poker::cards::Card;
use draw_poker::deck::Deck;
use draw_poker::evaluator::{evaluate_five, Category};
use draw_poker::hand::Hand;

fn cards(xs: [(u8, u8); 5]) -> [Card; 5] {
    xs.map(|(r, s)| Card::from_values(r, s).expect("valid card"))
}

fn score_label(xs: [(u8, u8); 5]) -> String {
    let mut deck = Deck::seeded(0);
    let score = Hand::from_cards(cards(xs)).score(&mut deck);
    assert_eq!(score.cards.len(), 5);
    score.category_label()
}

#[test]
fn category_one_pair() {
    assert_eq!(score_label([(14, 0), (14, 1), (12, 1), (13, 1), (11, 2)]), "One Pair");
}

#[test]
fn category_two_pair() {
    assert_eq!(score_label([(14, 0), (14, 1), (12, 1), (12, 2), (2, 2)]), "Two Pair");
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(score_label([(14, 0), (14, 1), (14, 2), (12, 2), (2, 2)]), "Three of a Kind");
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(score_label([(14, 0), (14, 1), (14, 2), (14, 3), (11, 2)]), "Four of a Kind");
}

#[test]
fn category_full_house() {
    assert_eq!(score_label([(14, 0), (14, 1), (14, 2), (12, 3), (12, 2)]), "Full House");
}

#[test]
fn category_royal_flush() {
    assert_eq!(score_label([(10, 0), (11, 0), (12, 0), (13, 0), (14, 0)]), "Royal Flush");
}

#[test]
fn category_straight_flush() {
    assert_eq!(score_label([(5, 1), (6, 1), (7, 1), (8, 1), (9, 1)]), "Straight Flush");
}

#[test]
fn category_wheel_straight() {
    assert_eq!(score_label([(2, 0), (3, 1), (4, 2), (5, 3), (14, 2)]), "Straight");
}

#[test]
fn category_broadway_straight() {
    assert_eq!(score_label([(10, 0), (11, 1), (12, 2), (13, 3), (14, 2)]), "Straight");
}

#[test]
fn category_ace_high() {
    assert_eq!(score_label([(14, 1), (12, 2), (5, 3), (7, 0), (10, 0)]), "Ace High");
}

#[test]
fn category_high_card() {
    assert_eq!(score_label([(11, 1), (12, 2), (5, 3), (7, 0), (10, 0)]), "High Card:Q\u{2666}");
}

#[test]
fn high_card_reports_highest_rank() {
    let hand = cards([(13, 3), (9, 0), (4, 1), (7, 2), (2, 0)]);
    assert_eq!(evaluate_five(&hand), Category::HighCard(hand[0]));
}

#[test]
fn input_order_does_not_matter() {
    let a = cards([(14, 0), (2, 1), (5, 2), (3, 3), (4, 0)]);
    let b = cards([(5, 2), (4, 0), (3, 3), (2, 1), (14, 0)]);
    assert_eq!(evaluate_five(&a), Category::Straight);
    assert_eq!(evaluate_five(&a), evaluate_five(&b));
}
