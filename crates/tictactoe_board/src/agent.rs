//! Agents and the policies they play.

use crate::{Action, Board};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A policy that proposes moves.
///
/// The board is borrowed for each call; agents never hold on to it and
/// never mutate it. Applying the proposal is the caller's job.
pub trait Agent {
    /// Proposes an action for the player to move, or `None` if there is none.
    fn get_action(&self, board: &Board) -> Option<Action>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

/// Picks the first available cell in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstAvailableAgent {
    name: String,
}

impl FirstAvailableAgent {
    /// Creates a new first-available agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for FirstAvailableAgent {
    #[instrument(skip(self, board), fields(agent = %self.name))]
    fn get_action(&self, board: &Board) -> Option<Action> {
        let action = board.available_actions().into_iter().next();
        match &action {
            Some(action) => debug!(%action, "Agent chose action"),
            None => debug!("No available actions"),
        }
        action
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Policies an agent can be built from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentKind {
    /// [`FirstAvailableAgent`].
    #[default]
    FirstAvailable,
}

impl AgentKind {
    /// Builds an agent of this kind.
    #[instrument(skip(name))]
    pub fn build(self, name: impl Into<String>) -> Box<dyn Agent> {
        match self {
            AgentKind::FirstAvailable => Box::new(FirstAvailableAgent::new(name)),
        }
    }
}
