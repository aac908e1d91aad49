//! Crate-wide error type.
//!
//! ## Recoverable vs Fatal
//!
//! - Recoverable (`Parse`, `Validation`, `EmptyResource`): the turn loop
//!   reports them back to the agent and asks again. State is never mutated.
//! - Fatal (`Configuration`, `IllegalPhase`, `Cancelled`, `Io`): propagate
//!   out of the game loop to the caller.

use std::fmt;

use thiserror::Error;

use super::phase::Phase;
use crate::cards::Card;

/// Shared piles a player can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pile {
    Stock,
    Discard,
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pile::Stock => write!(f, "stock"),
            Pile::Discard => write!(f, "discard pile"),
        }
    }
}

/// Why a proposed move was rejected by the rules.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("a meld needs at least 3 cards, got {0}")]
    TooFewCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("cards are neither one rank nor one suit")]
    Mixed,
    #[error("cards of one suit must be consecutive")]
    NotConsecutive,
    #[error("card {0} is not in your hand")]
    NotInHand(Card),
    #[error("no player named \"{0}\"")]
    UnknownPlayer(String),
    #[error("{owner} has no meld {index}")]
    NoSuchMeld { owner: String, index: usize },
    #[error("nothing to meld")]
    EmptyProposal,
    #[error("must take at least one card from the discard pile")]
    ZeroDraw,
}

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// Invalid deck, player or hand-size combination.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed interactive token.
    #[error("could not parse \"{input}\": {reason}")]
    Parse { input: String, reason: String },

    /// A move that breaks the rules.
    #[error("illegal move: {0}")]
    Validation(#[from] Violation),

    /// Asked for more cards than a pile holds.
    #[error("cannot take {requested} from the {pile}, only {available} available")]
    EmptyResource {
        pile: Pile,
        requested: usize,
        available: usize,
    },

    /// A turn transition was attempted in the wrong phase.
    #[error("expected {expected} phase, game is in {actual}")]
    IllegalPhase { expected: Phase, actual: Phase },

    /// Interactive input ended.
    #[error("input closed by {0}")]
    Cancelled(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Build a parse error for `input`.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        GameError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether the turn loop may re-prompt after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::Parse { .. } | GameError::Validation(_) | GameError::EmptyResource { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_recoverable_classification() {
        assert!(GameError::parse("ZZ", "bad").is_recoverable());
        assert!(GameError::from(Violation::Mixed).is_recoverable());
        assert!(GameError::EmptyResource {
            pile: Pile::Discard,
            requested: 3,
            available: 1,
        }
        .is_recoverable());

        assert!(!GameError::Configuration("x".into()).is_recoverable());
        assert!(!GameError::Cancelled("p0".into()).is_recoverable());
        assert!(!GameError::IllegalPhase {
            expected: Phase::Draw,
            actual: Phase::Meld,
        }
        .is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = GameError::from(Violation::NotInHand(Card::new(Rank::Four, Suit::Clubs)));
        assert_eq!(err.to_string(), "illegal move: card 4C is not in your hand");

        let err = GameError::EmptyResource {
            pile: Pile::Discard,
            requested: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "cannot take 3 from the discard pile, only 1 available");
    }
}
