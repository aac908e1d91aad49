//! Card model: ranks, suits, cards and decks.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: value tables and token conversion
//! - `Card`: immutable `(rank, suit)` pair
//! - `Deck`: ordered card sequence with shuffle, deal and draw

pub mod card;
pub mod deck;

pub use card::{join, parse_cards, points, Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
