//! Game driver: seats agents, runs turns and reports the result.
//!
//! `Game` owns the `GameState` and one agent per seat. Each turn it asks the
//! active player's agent for a draw, any number of melds and a discard, and
//! applies them through the turn transitions in `rules::turn`.
//!
//! ## Error Handling
//!
//! - Recoverable errors (bad draw count, illegal meld, card not in hand) are
//!   logged, reported to the agent through `Agent::rejected`, and the same
//!   decision is asked for again
//! - Everything else ends the game and is returned to the caller

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::scoring::{self, Standing};
use crate::agents::{Agent, GreedyAgent, InteractiveAgent};
use crate::core::{Ending, GameConfig, GameError, GameRng, GameState, Phase, TurnOutcome};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(String),
    /// Shared victory (tie for the top score).
    Winners(Vec<String>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &str) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Winners(ps) => ps.iter().any(|p| p == player),
        }
    }
}

/// Everything known about a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Why the game ended.
    pub ending: Ending,
    /// Scores, highest first.
    pub standings: Vec<Standing>,
    pub result: GameResult,
    /// Completed rounds.
    pub rounds: u32,
}

/// Agents keyed by seat name.
pub type AgentMap = BTreeMap<String, Box<dyn Agent>>;

/// A game in progress.
pub struct Game {
    state: GameState,
    agents: AgentMap,
}

impl Game {
    /// Deal a game for `config`, seating greedy agents for computers and
    /// stdin/stdout agents for humans.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let state = GameState::initialize(config, &mut rng)?;
        info!(
            "dealt {} cards to {} players (seed {})",
            config.hand_size(),
            state.player_count(),
            rng.seed()
        );

        let agents = config
            .seats()
            .into_iter()
            .map(|(name, computer)| {
                let agent: Box<dyn Agent> = if computer {
                    Box::new(GreedyAgent::new())
                } else {
                    Box::new(InteractiveAgent::stdio(config.debug))
                };
                (name, agent)
            })
            .collect();

        Self::with_agents(state, agents)
    }

    /// Run `state` with the given agents. Every seat needs an agent.
    pub fn with_agents(state: GameState, agents: AgentMap) -> Result<Self, GameError> {
        if let Some(name) = state.turn_order().iter().find(|name| !agents.contains_key(*name)) {
            return Err(GameError::Configuration(format!("no agent for player \"{name}\"")));
        }
        Ok(Self { state, agents })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the game, returning its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play one full turn for the active player.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if let Some(outcome) = self.state.conclude_if_stock_empty() {
            return Ok(outcome);
        }
        self.state.expect_phase(Phase::Draw)?;

        let name = self.state.active_name().to_string();
        let agent = self
            .agents
            .get_mut(&name)
            .ok_or_else(|| GameError::Configuration(format!("no agent for player \"{name}\"")))?;
        let state = &mut self.state;

        debug!("{name} to play, round {}", state.round());

        loop {
            let source = agent.draw(state, &name)?;
            if retry(&name, agent.as_mut(), state.draw(source))?.is_some() {
                break;
            }
        }

        while !state.active_player().hand().is_empty() {
            let Some(proposal) = agent.meld(state, &name)? else {
                break;
            };
            retry(&name, agent.as_mut(), state.meld(&proposal))?;
        }

        if let TurnOutcome::GameOver(ending) = state.finish_melding()? {
            return Ok(TurnOutcome::GameOver(ending));
        }

        loop {
            let card = agent.discard(state, &name)?;
            if let Some(outcome) = retry(&name, agent.as_mut(), state.discard(card))? {
                return Ok(outcome);
            }
        }
    }

    /// Play until the game ends and score it.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        info!("starting game: {}", self.state.turn_order().join(", "));

        while !self.state.is_over() {
            self.play_turn()?;
        }

        self.outcome()
            .ok_or_else(|| GameError::Configuration("game ended without an ending".into()))
    }

    /// Final scores, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        let ending = self.state.ending()?.clone();
        let standings = scoring::standings(&self.state);
        let result = scoring::result(&standings);

        info!("{ending}; result {result:?}");
        Some(GameOutcome {
            ending,
            standings,
            result,
            rounds: self.state.round(),
        })
    }
}

/// Pass through success, report recoverable errors to the agent, propagate
/// the rest.
fn retry<T>(name: &str, agent: &mut dyn Agent, result: Result<T, GameError>) -> Result<Option<T>, GameError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            warn!("{name}: {err}");
            agent.rejected(&err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
