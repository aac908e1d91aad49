//! Game state: shared piles, seated players and history.
//!
//! ## GameState
//!
//! Owns everything that changes during a game:
//! - Stock (face-down `Deck`, top = last card)
//! - Discard pile (face-up, top = last card)
//! - Players keyed by name; turn order is name order
//! - Active player, current phase and round counter
//! - Append-only history of `Snapshot`s, one per completed round
//!
//! Turn transitions (`draw`, `meld`, `discard`, ...) live in `rules::turn`.
//!
//! ## Snapshot
//!
//! A read-only copy of the table taken after the deal and after every
//! completed round. Built from `im` collections, so taking one is cheap and
//! later mutations never show through.

use im::{OrdMap, Vector};
use log::trace;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::GameError;
use super::phase::{Ending, Phase};
use super::player::Player;
use super::rng::GameRng;
use crate::cards::{Card, Deck};
use crate::melds::{Meld, MeldTable};

/// Immutable copy of the table at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Completed rounds when taken (0 = right after the deal).
    pub round: u32,
    pub stock: Vector<Card>,
    pub discard: Vector<Card>,
    pub players: OrdMap<String, Player>,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    stock: Deck,
    discard: Vector<Card>,
    players: OrdMap<String, Player>,
    order: Vec<String>,
    active: usize,
    phase: Phase,
    round: u32,
    history: Vector<Snapshot>,
    ending: Option<Ending>,
}

impl GameState {
    /// Shuffle a fresh deck and deal a game for `config`.
    pub fn initialize(config: &GameConfig, rng: &mut GameRng) -> Result<Self, GameError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::deal(config, deck)
    }

    /// Deal a game for `config` from `deck` as given (no shuffle).
    pub fn deal(config: &GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;

        let seats = config.seats();
        let (hands, stock) = deck.deal(config.hand_size(), seats.len())?;

        let players = seats
            .into_iter()
            .zip(hands)
            .map(|((name, computer), hand)| Player::new(name, hand, computer))
            .collect();

        Self::from_players(players, stock, Vec::new())
    }

    /// Build a state from explicit players and piles.
    ///
    /// The last card of `discard` is the top of the pile. Player names must be
    /// unique and at least one player is required.
    pub fn from_players(players: Vec<Player>, stock: Deck, discard: Vec<Card>) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::Configuration("at least one player is required".into()));
        }

        let mut seated = OrdMap::new();
        for player in players {
            let name = player.name().to_string();
            if seated.insert(name.clone(), player).is_some() {
                return Err(GameError::Configuration(format!("duplicate player name \"{name}\"")));
            }
        }

        let order = seated.keys().cloned().collect();
        let mut state = Self {
            stock,
            discard: discard.into_iter().collect(),
            players: seated,
            order,
            active: 0,
            phase: Phase::Draw,
            round: 0,
            history: Vector::new(),
            ending: None,
        };
        state.record_snapshot();

        Ok(state)
    }

    // === Piles ===

    /// The stock.
    #[must_use]
    pub fn stock(&self) -> &Deck {
        &self.stock
    }

    /// The discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Top card of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.last()
    }

    // === Players ===

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.order.len()
    }

    /// Player names in turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[String] {
        &self.order
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// Iterate over players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Name of the player whose turn it is.
    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.order[self.active]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_name()]
    }

    // === Progress ===

    /// Current phase of the active player's turn.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed rounds.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Why the game ended, once it has.
    #[must_use]
    pub fn ending(&self) -> Option<&Ending> {
        self.ending.as_ref()
    }

    /// Snapshots taken so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Snapshot> {
        &self.history
    }

    /// Copy the current table into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            stock: self.stock.cards().iter().copied().collect(),
            discard: self.discard.clone(),
            players: self.players.clone(),
        }
    }

    // === Crate-internal mutation (used by rules::turn) ===

    pub(crate) fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::IllegalPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Deck {
        &mut self.stock
    }

    pub(crate) fn discard_mut(&mut self) -> &mut Vector<Card> {
        &mut self.discard
    }

    pub(crate) fn active_player_mut(&mut self) -> &mut Player {
        let name = &self.order[self.active];
        &mut self.players[name]
    }

    /// Move to the next player, closing the round after the last one.
    pub(crate) fn advance(&mut self) {
        self.active += 1;
        if self.active == self.order.len() {
            self.active = 0;
            self.round += 1;
            self.record_snapshot();
        }
        self.phase = Phase::Draw;
    }

    pub(crate) fn finish(&mut self, ending: Ending) {
        self.phase = Phase::GameOver;
        self.ending = Some(ending);
    }

    fn record_snapshot(&mut self) {
        let snapshot = self.snapshot();
        trace!("snapshot after round {}: {:?}", snapshot.round, snapshot);
        self.history.push_back(snapshot);
    }
}

impl MeldTable for GameState {
    fn has_player(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    fn meld(&self, owner: &str, index: usize) -> Option<&Meld> {
        self.players.get(owner)?.melds().get(index)
    }
}
