//! Per-player table data: hand, melds and capability flag.
//!
//! Hands and meld lists use `im` persistent collections so history snapshots
//! can share structure with the live state.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{self, Card};
use crate::melds::Meld;

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: OrdSet<Card>,
    melds: Vector<Meld>,
    computer: bool,
}

impl Player {
    /// Seat a player holding `hand`.
    pub fn new(name: impl Into<String>, hand: impl IntoIterator<Item = Card>, computer: bool) -> Self {
        Self {
            name: name.into(),
            hand: hand.into_iter().collect(),
            melds: Vector::new(),
            computer,
        }
    }

    /// Add a meld that is already on the table (for setting up positions).
    #[must_use]
    pub fn with_meld(mut self, meld: Meld) -> Self {
        self.melds.push_back(meld);
        self
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this seat is played by a computer agent.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.computer
    }

    /// Cards in hand, in card order.
    #[must_use]
    pub fn hand(&self) -> &OrdSet<Card> {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Whether `card` is in hand.
    #[must_use]
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Melds laid down by this player, in the order they were made.
    #[must_use]
    pub fn melds(&self) -> &Vector<Meld> {
        &self.melds
    }

    /// Points of all melded cards owned by this player.
    #[must_use]
    pub fn melded_points(&self) -> i32 {
        self.melds.iter().map(Meld::points).sum()
    }

    /// Points of the cards still in hand.
    #[must_use]
    pub fn hand_points(&self) -> i32 {
        cards::points(&self.hand)
    }

    pub(crate) fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub(crate) fn remove_card(&mut self, card: &Card) -> bool {
        self.hand.remove(card).is_some()
    }

    pub(crate) fn push_meld(&mut self, meld: Meld) -> usize {
        self.melds.push_back(meld);
        self.melds.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::melds::MeldKind;

    #[test]
    fn test_new_player() {
        let player = Player::new("p0", parse_cards("KS 2D").unwrap(), false);

        assert_eq!(player.name(), "p0");
        assert!(!player.is_computer());
        assert_eq!(player.hand_size(), 2);
        assert!(player.melds().is_empty());
    }

    #[test]
    fn test_hand_is_a_set() {
        let player = Player::new("c0", parse_cards("KS KS 2D").unwrap(), true);
        assert_eq!(player.hand_size(), 2);
    }

    #[test]
    fn test_receive_and_remove() {
        let mut player = Player::new("p0", Vec::new(), false);
        let cards = parse_cards("KS 2D").unwrap();

        player.receive(cards.clone());
        assert!(player.holds(&cards[0]));

        assert!(player.remove_card(&cards[0]));
        assert!(!player.remove_card(&cards[0]));
        assert_eq!(player.hand_size(), 1);
    }

    #[test]
    fn test_points() {
        let player = Player::new("p0", parse_cards("AS").unwrap(), false)
            .with_meld(Meld::new("p0", MeldKind::Set, parse_cards("10H 10S 10C").unwrap()));

        assert_eq!(player.melded_points(), 30);
        assert_eq!(player.hand_points(), 15);
    }

    #[test]
    fn test_push_meld_index() {
        let mut player = Player::new("p0", Vec::new(), false);
        let meld = Meld::new("p0", MeldKind::Set, parse_cards("2D 2H 2C").unwrap());

        assert_eq!(player.push_meld(meld.clone()), 0);
        assert_eq!(player.push_meld(meld), 1);
    }
}
