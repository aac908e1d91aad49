//! Playing cards: ranks, suits and their value tables.
//!
//! ## Value Tables
//!
//! Every rank carries two values:
//! - **Ordering value** (2..=14): used for run adjacency. Aces are high only.
//! - **Point value**: used for scoring. Digits score their face value,
//!   J/Q/K score 10 and the Ace scores 15.
//!
//! ## Tokens
//!
//! Cards are written as a rank followed by a single suit letter,
//! e.g. `"10H"`, `"QS"`, `"2D"`. `Display` and `FromStr` are inverses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Card rank, ordered from Two to Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ordering value used for run adjacency (2..=14).
    #[must_use]
    pub const fn order(self) -> u8 {
        self as u8 + 2
    }

    /// Point value used for scoring.
    #[must_use]
    pub const fn points(self) -> i32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 15,
            _ => self.order() as i32,
        }
    }

    /// Token used in card strings.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a rank token (case-insensitive).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.token().eq_ignore_ascii_case(token))
    }
}

/// Card suit.
///
/// Declaration order matches the order suits are laid out in a fresh deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Hearts,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades];

    /// Single-letter token used in card strings.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Unicode suit symbol for table display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Clubs => '\u{2663}',
            Suit::Spades => '\u{2660}',
        }
    }

    /// Parse a suit letter (case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.letter() == letter.to_ascii_uppercase())
    }
}

/// An immutable playing card.
///
/// Equality and hashing are by `(rank, suit)`. The derived ordering sorts by
/// rank first, which is also the order hands are shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Ordering value of the card's rank.
    #[must_use]
    pub const fn order(self) -> u8 {
        self.rank.order()
    }

    /// Point value of the card's rank.
    #[must_use]
    pub const fn points(self) -> i32 {
        self.rank.points()
    }

    /// Card with its suit symbol, e.g. `10♥`.
    #[must_use]
    pub fn symbol(self) -> String {
        format!("{}{}", self.rank.token(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let malformed = |reason: &str| GameError::parse(token, reason);

        let mut chars = token.chars();
        let letter = chars
            .next_back()
            .ok_or_else(|| malformed("empty card token"))?;
        let rank_token = chars.as_str();

        if rank_token.is_empty() || rank_token.len() > 2 {
            return Err(malformed("expected <RANK><SUIT>, e.g. \"4C\" for four of clubs"));
        }

        let rank = Rank::from_token(rank_token)
            .ok_or_else(|| malformed("rank must be one of 2-10, J, Q, K, A"))?;
        let suit = Suit::from_letter(letter)
            .ok_or_else(|| malformed("suit must be one of H, S, C, D"))?;

        Ok(Card::new(rank, suit))
    }
}

/// Total point value of a collection of cards.
pub fn points<'a>(cards: impl IntoIterator<Item = &'a Card>) -> i32 {
    cards.into_iter().map(|card| card.points()).sum()
}

/// Format cards as space-separated tokens, e.g. `"4C 5C 6C"`.
pub fn join<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a whitespace-separated list of card tokens.
///
/// ```
/// use rust_rummy::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("10H JH QH").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(cards.len(), 3);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split_whitespace().map(str::parse).collect()
}
