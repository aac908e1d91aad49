//! Game configuration.
//!
//! `GameConfig` describes the table before the deal: how many human and
//! computer players sit down, how many cards each receives, which seed drives
//! the shuffle and whether debug views are shown.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::DECK_SIZE;

/// Hand size when exactly two players are seated.
pub const TWO_PLAYER_HAND_SIZE: usize = 13;

/// Hand size for every other table size.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of interactive players (named `p{i}`).
    pub humans: usize,

    /// Number of computer players (named `c{i}`).
    pub computers: usize,

    /// Cards dealt to each player. `None` picks by table size.
    pub hand_size: Option<usize>,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Show every hand and the stock in table views.
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            humans: 1,
            computers: 0,
            hand_size: None,
            seed: None,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Create a config with the given number of human and computer players.
    pub fn new(humans: usize, computers: usize) -> Self {
        Self {
            humans,
            computers,
            ..Self::default()
        }
    }

    /// Set the number of human players.
    #[must_use]
    pub fn with_humans(mut self, humans: usize) -> Self {
        self.humans = humans;
        self
    }

    /// Set the number of computer players.
    #[must_use]
    pub fn with_computers(mut self, computers: usize) -> Self {
        self.computers = computers;
        self
    }

    /// Override the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = Some(size);
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable debug views.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Total players at the table, or `None` if the count overflows.
    #[must_use]
    pub fn player_count(&self) -> Option<usize> {
        self.humans.checked_add(self.computers)
    }

    /// Cards dealt to each player: 13 heads-up, 7 otherwise, unless overridden.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size.unwrap_or(match self.player_count() {
            Some(2) => TWO_PLAYER_HAND_SIZE,
            _ => DEFAULT_HAND_SIZE,
        })
    }

    /// Seat names with their computer flag, humans first.
    ///
    /// The index counts across both groups, so one human and two computers
    /// gives `p0`, `c1`, `c2`. Call `validate` first: the list has one
    /// entry per player.
    #[must_use]
    pub fn seats(&self) -> Vec<(String, bool)> {
        let humans = (0..self.humans).map(|i| (format!("p{i}"), false));
        let computers = (self.humans..self.humans.saturating_add(self.computers))
            .map(|i| (format!("c{i}"), true));
        humans.chain(computers).collect()
    }

    /// Reject tables the engine cannot seat or deal from one deck.
    pub fn validate(&self) -> Result<(), GameError> {
        let players = self
            .player_count()
            .ok_or_else(|| GameError::Configuration("too many players".into()))?;
        if players == 0 {
            return Err(GameError::Configuration("at least one player is required".into()));
        }

        let size = self.hand_size();
        if size == 0 {
            return Err(GameError::Configuration("hand size must be at least 1".into()));
        }
        match size.checked_mul(players) {
            Some(needed) if needed <= DECK_SIZE => Ok(()),
            _ => Err(GameError::Configuration(format!(
                "cannot deal {size} cards to {players} players from a deck of {DECK_SIZE}"
            ))),
        }
    }
}
