//! Deck construction, shuffling, dealing and drawing.
//!
//! The top of the deck is the **end** of the backing `Vec`: `draw` pops from
//! the end, while `deal` hands out cards from the front.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameError, GameRng, Pile};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create a standard 52-card deck, ranks outer and suits inner.
    #[must_use]
    pub fn new() -> Self {
        let cards = Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Create a deck from an explicit card list (last card is the top).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in deck order (index 0 is the bottom).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyResource {
            pile: Pile::Stock,
            requested: 1,
            available: 0,
        })
    }

    /// Deal `count` cards to each of `players` hands.
    ///
    /// Hands are taken from the front of the deck in consecutive blocks;
    /// the remaining cards form the returned deck.
    ///
    /// Fails with `GameError::Configuration` if `count * players` exceeds
    /// the cards available.
    pub fn deal(self, count: usize, players: usize) -> Result<(Vec<Vec<Card>>, Deck), GameError> {
        let needed = count
            .checked_mul(players)
            .filter(|&needed| needed <= self.cards.len())
            .ok_or_else(|| {
                GameError::Configuration(format!(
                    "cannot deal {count} cards to {players} players from a deck of {}",
                    self.cards.len()
                ))
            })?;

        let mut cards = self.cards;
        let rest = cards.split_off(needed);
        let mut dealt = cards.into_iter();
        let hands = (0..players)
            .map(|_| dealt.by_ref().take(count).collect())
            .collect();

        Ok((hands, Deck::from_cards(rest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_unique() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_standard_deck_order() {
        let deck = Deck::new();
        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(deck.cards()[3], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::new();
        let card = deck.draw().unwrap();
        assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck.len(), 51);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::new();
        for _ in 0..DECK_SIZE {
            deck.draw().unwrap();
        }
        assert!(deck.is_empty());

        let err = deck.draw().unwrap_err();
        assert!(matches!(err, GameError::EmptyResource { pile: Pile::Stock, .. }));
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::new());

        let mut sorted = deck.cards().to_vec();
        sorted.sort();
        let mut expected = Deck::new().cards().to_vec();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal() {
        let (hands, rest) = Deck::new().deal(7, 2).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].len(), 7);
        assert_eq!(hands[1].len(), 7);
        assert_eq!(rest.len(), 38);

        // Hands come from the front in blocks
        assert_eq!(hands[0][0], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(hands[1][0], Card::new(Rank::Three, Suit::Spades));
    }

    #[test]
    fn test_deal_exact_fit() {
        let (hands, rest) = Deck::new().deal(13, 4).unwrap();
        assert_eq!(hands.len(), 4);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_deal_too_many() {
        let err = Deck::new().deal(7, 8).unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));

        let err = Deck::new().deal(27, 2).unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn test_deal_zero_count() {
        let (hands, rest) = Deck::new().deal(0, 3).unwrap();
        assert_eq!(hands.len(), 3);
        assert!(hands.iter().all(Vec::is_empty));
        assert_eq!(rest.len(), DECK_SIZE);
    }
}
