//! Agents: who decides what a seat does on its turn.
//!
//! ## Key Types
//!
//! - `Agent`: draw / meld / discard decisions plus rejection feedback
//! - `GreedyAgent`: deterministic computer player
//! - `InteractiveAgent`: human player speaking the text protocol
//!
//! The engine owns one boxed agent per seat and passes the game state to it
//! explicitly on every call.

pub mod agent;
pub mod greedy;
pub mod interactive;
pub mod protocol;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use interactive::{InteractiveAgent, LineSource};
pub use protocol::{parse_discard, parse_draw, parse_meld, MeldCommand};
