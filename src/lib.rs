//! # rust-rummy
//!
//! A turn-based rummy engine for two or more players.
//!
//! ## Design Principles
//!
//! 1. **Rules Own the State**: Agents only return decisions. Every draw, meld
//!    and discard goes through a phase-checked transition that validates the
//!    whole move before mutating anything.
//!
//! 2. **Weak Meld References**: A lay-off names the meld it extends as
//!    `owner:index` and is resolved against the table each time it is
//!    validated. No meld ever holds another.
//!
//! 3. **Deterministic Replays**: Shuffles come from a seeded `GameRng`, and the
//!    greedy agent is deterministic, so a seed reproduces a computer game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands, melds and the discard pile use
//!   `im-rs`, so the per-round history snapshots share structure with the
//!   live state.
//!
//! - **Turn State Machine**: `Draw → Meld → Discard`, then the next player in
//!   name order. `GameOver` is terminal.
//!
//! ## Modules
//!
//! - `cards`: Ranks, suits, cards and the deck
//! - `core`: Errors, phases, players, state, RNG, configuration
//! - `melds`: Meld detection and validation
//! - `rules`: Turn transitions, scoring and the game driver
//! - `agents`: Greedy and interactive decision-makers
//! - `display`: Terminal rendering of the table and scores

pub mod agents;
pub mod cards;
pub mod core;
pub mod display;
pub mod melds;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::core::{
    Ending, GameConfig, GameError, GameRng, GameState, Phase, Pile, Player, Snapshot, TurnOutcome,
    Violation,
};

pub use crate::melds::{find_melds, validate, Candidate, Meld, MeldKind, MeldProposal, MeldRef};

pub use crate::rules::{score, DrawSource, Game, GameOutcome, GameResult, Standing};

pub use crate::agents::{Agent, GreedyAgent, InteractiveAgent};
