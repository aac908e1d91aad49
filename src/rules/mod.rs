//! Rules: turn transitions, scoring and the game driver.
//!
//! - `turn`: phase-checked `draw` / `meld` / `finish_melding` / `discard` on
//!   `GameState`, including the termination check
//! - `scoring`: per-player scores, standings and the winner
//! - `engine`: `Game`, which asks agents for decisions and applies them

pub mod engine;
pub mod scoring;
pub mod turn;

pub use engine::{AgentMap, Game, GameOutcome, GameResult};
pub use scoring::{result, score, standings, Standing};
pub use turn::DrawSource;
