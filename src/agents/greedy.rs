//! Greedy computer player.
//!
//! ## Strategy
//!
//! - **Draw**: take the top discard if it completes a meld with the hand,
//!   otherwise draw from the stock
//! - **Meld**: lay down the largest detected meld, repeatedly; once none are
//!   left, lay off single cards onto any table meld that accepts them
//! - **Discard**: the highest-point card that is not part of a detected meld
//!   (or the highest-point card overall if every card is)
//!
//! The strategy is deterministic, so a seeded game with only greedy players
//! always plays out the same way.

use log::trace;

use super::agent::Agent;
use crate::cards::Card;
use crate::core::{GameError, GameState, Player};
use crate::melds::{self, find_melds, MeldProposal, MeldRef};
use crate::rules::DrawSource;

/// Greedy meld-first strategy.
#[derive(Clone, Debug, Default)]
pub struct GreedyAgent {
    /// The last decision was refused.
    rejected: bool,
}

impl GreedyAgent {
    /// Create a greedy agent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn seat<'a>(state: &'a GameState, me: &str) -> Result<&'a Player, GameError> {
        state
            .player(me)
            .ok_or_else(|| GameError::Configuration(format!("no seat named \"{me}\"")))
    }

    /// Whether `card` would complete a meld with `player`'s hand.
    fn completes_meld(player: &Player, card: Card) -> bool {
        let mut hand: Vec<Card> = player.hand().iter().copied().collect();
        hand.push(card);
        find_melds(&hand).iter().any(|candidate| candidate.contains(&card))
    }

    /// First single-card lay-off the table accepts, highest-point card first.
    fn find_layoff(state: &GameState, player: &Player) -> Option<MeldProposal> {
        let mut hand: Vec<Card> = player.hand().iter().copied().collect();
        hand.sort_by(|a, b| b.points().cmp(&a.points()).then_with(|| a.cmp(b)));

        for card in hand {
            for owner in state.players() {
                for index in 0..owner.melds().len() {
                    let reference = MeldRef::new(owner.name(), index);
                    if melds::validate(&[card], Some(&reference), state) {
                        return Some(MeldProposal::layoff(reference, [card]));
                    }
                }
            }
        }

        None
    }
}

impl Agent for GreedyAgent {
    fn draw(&mut self, state: &GameState, me: &str) -> Result<DrawSource, GameError> {
        let player = Self::seat(state, me)?;

        let wants_discard = state
            .discard_top()
            .is_some_and(|&top| Self::completes_meld(player, top));

        // A refused draw flips the choice
        let take_discard = if std::mem::take(&mut self.rejected) {
            !wants_discard && !state.discard_pile().is_empty()
        } else {
            wants_discard
        };

        Ok(if take_discard { DrawSource::Discard(1) } else { DrawSource::Stock })
    }

    fn meld(&mut self, state: &GameState, me: &str) -> Result<Option<MeldProposal>, GameError> {
        if std::mem::take(&mut self.rejected) {
            return Ok(None);
        }

        let player = Self::seat(state, me)?;
        let proposal = match find_melds(player.hand()).first() {
            Some(candidate) => Some(MeldProposal::from(candidate)),
            None => Self::find_layoff(state, player),
        };

        trace!("{me} proposes {proposal:?}");
        Ok(proposal)
    }

    fn discard(&mut self, state: &GameState, me: &str) -> Result<Card, GameError> {
        self.rejected = false;

        let player = Self::seat(state, me)?;
        let candidates = find_melds(player.hand());
        let in_meld = |card: &Card| candidates.iter().any(|candidate| candidate.contains(card));

        let by_points = |a: &&Card, b: &&Card| a.points().cmp(&b.points()).then_with(|| a.cmp(b));
        player
            .hand()
            .iter()
            .filter(|&&card| !in_meld(&card))
            .max_by(by_points)
            .or_else(|| player.hand().iter().max_by(by_points))
            .copied()
            .ok_or_else(|| GameError::Configuration(format!("{me} has nothing to discard")))
    }

    fn rejected(&mut self, _error: &GameError) {
        self.rejected = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Deck};
    use crate::melds::{Meld, MeldKind};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn table(hand: &str, other_melds: Vec<Meld>, discard: &str) -> GameState {
        let mut other = Player::new("b", cards("2C"), true);
        for meld in other_melds {
            other = other.with_meld(meld);
        }
        let players = vec![Player::new("a", cards(hand), true), other];
        GameState::from_players(players, Deck::from_cards(cards("9S 8S 7S")), cards(discard)).unwrap()
    }

    #[test]
    fn test_draws_discard_that_completes_meld() {
        let state = table("4H 5H KS", Vec::new(), "2D 6H");
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.draw(&state, "a").unwrap(), DrawSource::Discard(1));
    }

    #[test]
    fn test_draws_stock_otherwise() {
        let state = table("4H 5H KS", Vec::new(), "6H 2D");
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.draw(&state, "a").unwrap(), DrawSource::Stock);

        let state = table("4H 5H KS", Vec::new(), "");
        assert_eq!(agent.draw(&state, "a").unwrap(), DrawSource::Stock);
    }

    #[test]
    fn test_rejected_draw_switches_pile() {
        let state = table("4H 5H KS", Vec::new(), "6H");
        let mut agent = GreedyAgent::new();

        agent.rejected(&GameError::parse("x", "y"));
        assert_eq!(agent.draw(&state, "a").unwrap(), DrawSource::Stock);
        assert_eq!(agent.draw(&state, "a").unwrap(), DrawSource::Discard(1));
    }

    #[test]
    fn test_melds_largest_first() {
        let mut state = table("2D 2H 2C 9S 10S JS QS", Vec::new(), "");
        state.draw(DrawSource::Stock).unwrap();
        let mut agent = GreedyAgent::new();

        let proposal = agent.meld(&state, "a").unwrap().unwrap();
        assert_eq!(proposal.cards, cards("9S 10S JS QS"));
        assert!(proposal.reference.is_none());
    }

    #[test]
    fn test_lays_off_when_no_meld() {
        let run = Meld::new("b", MeldKind::Run, cards("4C 5C 6C"));
        let state = table("7C KD", vec![run], "");
        let mut agent = GreedyAgent::new();

        let proposal = agent.meld(&state, "a").unwrap().unwrap();
        assert_eq!(proposal, MeldProposal::layoff(MeldRef::new("b", 0), [card("7C")]));
    }

    #[test]
    fn test_stops_melding() {
        let state = table("7C KD", Vec::new(), "");
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.meld(&state, "a").unwrap(), None);

        let state = table("2D 2H 2C", Vec::new(), "");
        agent.rejected(&GameError::parse("x", "y"));
        assert_eq!(agent.meld(&state, "a").unwrap(), None);
    }

    #[test]
    fn test_discards_highest_loose_card() {
        let state = table("2D 2H 2C KS 9H", Vec::new(), "");
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.discard(&state, "a").unwrap(), card("KS"));
    }

    #[test]
    fn test_discards_from_meld_when_nothing_loose() {
        let state = table("2D 2H 2C 2S", Vec::new(), "");
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.discard(&state, "a").unwrap(), card("2S"));
    }

    #[test]
    fn test_unknown_seat() {
        let state = table("2D", Vec::new(), "");
        let mut agent = GreedyAgent::new();
        assert!(agent.discard(&state, "zz").is_err());
    }
}
