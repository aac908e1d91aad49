//! Turn phases and turn outcomes.
//!
//! A turn walks `Draw → Meld → Discard`, then control passes to the next
//! player in name order. `GameOver` is terminal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Draw,
    Meld,
    Discard,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Draw => "draw",
            Phase::Meld => "meld",
            Phase::Discard => "discard",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Why the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// The named player finished a turn with an empty hand.
    PlayerOut(String),
    /// The stock ran out.
    StockExhausted,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::PlayerOut(name) => write!(f, "{name} went out"),
            Ending::StockExhausted => write!(f, "the stock ran out"),
        }
    }
}

/// Result of finishing a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play passes to the next player.
    Continue,
    /// The game is over.
    GameOver(Ending),
}

impl TurnOutcome {
    /// Whether this outcome ends the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnOutcome::GameOver(_))
    }
}
