//! Core engine types: errors, phases, players, state, RNG, configuration.
//!
//! This module holds the table model. Turn transitions that mutate it live in
//! `rules`, and decision-making lives in `agents`.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::{GameError, Pile, Violation};
pub use phase::{Ending, Phase, TurnOutcome};
pub use player::Player;
pub use rng::GameRng;
pub use state::{GameState, Snapshot};
