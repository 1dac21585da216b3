//! draw-poker: five-card draw video poker engine
//!
//! Goals:
//! - A deck that never loses or duplicates a card: cards move between the draw
//!   pile, the discard pile, and the hand holding them
//! - One discard/redraw round per hand, validated before any card moves
//! - Classification from One Pair to Royal Flush as a tagged enum
//!
//! ## Quick start: play one round
//! ```
//! use draw_poker::deck::Deck;
//! use draw_poker::hand::Hand;
//!
//! let mut deck = Deck::seeded(42);
//! let mut hand = Hand::deal(&mut deck).unwrap();
//! hand.discard(&[0, 4], &mut deck).unwrap();
//! let score = hand.score(&mut deck);
//! println!("{}", score.category);
//! assert_eq!(deck.total(), 52);
//! ```
//!
//! ## Sessions
//! [`session::SessionRegistry`] keeps one deck and hand per opaque session id
//! and is what front-ends drive through [`engine::PokerEngine`].
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin draw-poker -- --seed 7 --log-file draw-poker.log
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
