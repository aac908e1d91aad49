//! Agent trait: the decision-maker behind a seat.
//!
//! Agents never mutate the game. They look at the state, return a decision,
//! and the engine applies it. A decision the rules refuse is reported back
//! through `rejected` and the same question is asked again.

use crate::cards::Card;
use crate::core::{GameError, GameState};
use crate::melds::MeldProposal;
use crate::rules::DrawSource;

/// Decision-maker for one player.
///
/// ## Implementation Notes
///
/// - `me` is the name of the seat the agent plays; it is always the active
///   player when a method is called
/// - `meld` is called repeatedly until it returns `None` or the hand is empty
/// - Errors returned from these methods are fatal to the game; use them only
///   for things like closed input
pub trait Agent {
    /// Choose where to draw from.
    fn draw(&mut self, state: &GameState, me: &str) -> Result<DrawSource, GameError>;

    /// Choose the next meld, or `None` to move on to the discard.
    fn meld(&mut self, state: &GameState, me: &str) -> Result<Option<MeldProposal>, GameError>;

    /// Choose a card to discard.
    fn discard(&mut self, state: &GameState, me: &str) -> Result<Card, GameError>;

    /// The previous decision broke the rules.
    fn rejected(&mut self, _error: &GameError) {}
}
