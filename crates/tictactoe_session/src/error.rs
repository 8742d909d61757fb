//! Session error types.

use tictactoe_board::{Action, ActionError};

/// Error that stops a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// An agent proposed an action the board refused.
    #[display("Agent {} proposed {} which was rejected: {}", agent, action, reason)]
    Rejected {
        /// Name of the offending agent.
        agent: String,
        /// The refused action.
        action: Action,
        /// Why the board refused it.
        reason: ActionError,
    },

    /// Writing game output failed.
    #[display("Failed to write output: {}", message)]
    Output {
        /// Underlying error text.
        message: String,
    },
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output {
            message: format!("JSON encoding failed: {}", err),
        }
    }
}
