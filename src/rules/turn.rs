//! Turn transitions on `GameState`.
//!
//! Every transition checks the phase first and validates the whole move
//! before touching state, so a rejected move leaves the game exactly as it
//! was and the caller can simply ask again.
//!
//! ## Termination
//!
//! After a discard (or after melding away the whole hand) the game ends at
//! once if the acting player's hand is empty or the stock is empty. Nobody
//! else gets a final turn.

use log::{debug, info};

use crate::cards::{self, Card};
use crate::core::{Ending, GameError, GameState, Phase, Pile, TurnOutcome, Violation};
use crate::melds::{self, Meld, MeldProposal};

/// Where a draw takes cards from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawSource {
    /// One card from the top of the stock.
    Stock,
    /// The top N cards of the discard pile.
    Discard(usize),
}

impl GameState {
    /// Draw phase: move cards from `source` into the active player's hand.
    ///
    /// Returns the cards drawn.
    pub fn draw(&mut self, source: DrawSource) -> Result<Vec<Card>, GameError> {
        self.expect_phase(Phase::Draw)?;

        let drawn = match source {
            DrawSource::Stock => vec![self.stock_mut().draw()?],
            DrawSource::Discard(0) => return Err(Violation::ZeroDraw.into()),
            DrawSource::Discard(count) => {
                let available = self.discard_pile().len();
                if count > available {
                    return Err(GameError::EmptyResource {
                        pile: Pile::Discard,
                        requested: count,
                        available,
                    });
                }
                self.discard_mut().split_off(available - count).into_iter().collect()
            }
        };

        let pile = match source {
            DrawSource::Stock => Pile::Stock,
            DrawSource::Discard(_) => Pile::Discard,
        };
        debug!("{} draws {} from the {pile}", self.active_name(), cards::join(&drawn));

        self.active_player_mut().receive(drawn.iter().copied());
        self.set_phase(Phase::Meld);

        Ok(drawn)
    }

    /// Meld phase: lay down a new meld or lay off onto a table meld.
    ///
    /// Returns the index of the new meld among the active player's melds.
    pub fn meld(&mut self, proposal: &MeldProposal) -> Result<usize, GameError> {
        self.expect_phase(Phase::Meld)?;

        let player = self.active_player();
        if let Some(card) = proposal.cards.iter().find(|card| !player.holds(card)) {
            return Err(Violation::NotInHand(*card).into());
        }

        let kind = melds::check(&proposal.cards, proposal.reference.as_ref(), self)?;

        let owner = self.active_name().to_string();
        let mut meld = Meld::new(owner.as_str(), kind, proposal.cards.iter().copied());
        if let Some(reference) = &proposal.reference {
            meld = meld.with_reference(reference.clone());
        }

        match &meld.reference {
            Some(reference) => debug!("{owner} lays off {} on {reference}", cards::join(&meld.cards)),
            None => debug!("{owner} melds {} ({kind})", cards::join(&meld.cards)),
        }

        let player = self.active_player_mut();
        for card in &proposal.cards {
            player.remove_card(card);
        }
        Ok(player.push_meld(meld))
    }

    /// End the meld phase.
    ///
    /// A player who melded their whole hand goes out here and the game ends;
    /// otherwise play moves on to the discard phase.
    pub fn finish_melding(&mut self) -> Result<TurnOutcome, GameError> {
        self.expect_phase(Phase::Meld)?;

        if self.active_player().hand().is_empty() {
            return Ok(self.end_turn());
        }

        self.set_phase(Phase::Discard);
        Ok(TurnOutcome::Continue)
    }

    /// Discard phase: move one hand card to the top of the discard pile and
    /// end the turn.
    pub fn discard(&mut self, card: Card) -> Result<TurnOutcome, GameError> {
        self.expect_phase(Phase::Discard)?;

        if !self.active_player_mut().remove_card(&card) {
            return Err(Violation::NotInHand(card).into());
        }
        self.discard_mut().push_back(card);
        debug!("{} discards {card}", self.active_name());

        Ok(self.end_turn())
    }

    /// End the game if there is nothing left to draw from the stock at the
    /// start of a turn (only reachable when the deal used up the deck).
    pub fn conclude_if_stock_empty(&mut self) -> Option<TurnOutcome> {
        if self.phase() != Phase::Draw || !self.stock().is_empty() {
            return None;
        }
        info!("stock is empty before the first draw");
        self.finish(Ending::StockExhausted);
        Some(TurnOutcome::GameOver(Ending::StockExhausted))
    }

    fn end_turn(&mut self) -> TurnOutcome {
        let ending = if self.active_player().hand().is_empty() {
            Some(Ending::PlayerOut(self.active_name().to_string()))
        } else if self.stock().is_empty() {
            Some(Ending::StockExhausted)
        } else {
            None
        };

        match ending {
            Some(ending) => {
                info!("game over after round {}: {ending}", self.round());
                self.finish(ending.clone());
                TurnOutcome::GameOver(ending)
            }
            None => {
                self.advance();
                TurnOutcome::Continue
            }
        }
    }
}
