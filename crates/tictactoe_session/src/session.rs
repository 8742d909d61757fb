//! The session loop: two agents alternating on one board.

use crate::{JsonRenderer, OutputFormat, Renderer, SessionConfig, SessionError, TextRenderer};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tictactoe_board::{Action, Agent, Board, BoardState, GameStatus, Mark};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The mark completed a line.
    #[display("{} wins", _0)]
    Win(Mark),
    /// The player to move had no legal action.
    #[display("draw")]
    Draw,
}

/// One accepted move and the position it produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct HalfMove {
    /// 1-based move number.
    ply: usize,
    /// The applied action.
    action: Action,
    /// Grid after the action.
    board_state: BoardState,
    /// Status after the action.
    status: GameStatus,
}

/// Everything that happened in a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Accepted moves in order.
    moves: Vec<HalfMove>,
    /// How the game ended.
    outcome: Outcome,
    /// Board status at the end. A draw still reports a turn state here.
    final_status: GameStatus,
    /// Grid at the end.
    final_board: BoardState,
}

/// Two agents sharing one board.
pub struct Session {
    board: Board,
    x_agent: Box<dyn Agent>,
    o_agent: Box<dyn Agent>,
    moves: Vec<HalfMove>,
}

impl Session {
    /// Creates a session on a fresh board.
    pub fn new(x_agent: Box<dyn Agent>, o_agent: Box<dyn Agent>) -> Self {
        Self::with_board(Board::new(), x_agent, o_agent)
    }

    /// Creates a session continuing from an existing board.
    pub fn with_board(board: Board, x_agent: Box<dyn Agent>, o_agent: Box<dyn Agent>) -> Self {
        Self {
            board,
            x_agent,
            o_agent,
            moves: Vec::new(),
        }
    }

    /// Builds both agents from configuration.
    #[instrument]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.player_x().build("player x"),
            config.player_o().build("player o"),
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until a line is completed or the player to move has no action.
    ///
    /// X's agent moves first, then the agents alternate. The board itself has
    /// no draw status, so a draw is detected here, when the agent to move
    /// comes back empty-handed.
    #[instrument(skip_all, fields(x = self.x_agent.name(), o = self.o_agent.name()))]
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<GameRecord, SessionError> {
        info!("Starting session");

        let mut side = self.board.game_status().to_move().unwrap_or(Mark::X);
        let outcome = loop {
            if let Some(winner) = self.board.game_status().winner() {
                break Outcome::Win(winner);
            }
            if let Some(outcome) = self.half_move(side, renderer)? {
                break outcome;
            }
            side = side.opponent();
        };

        info!(%outcome, moves = self.moves.len(), "Session finished");
        let record = self.record(outcome);
        renderer.finish(&record)?;
        Ok(record)
    }

    /// Lets the agent for `side` move once. Returns the outcome if the game ended.
    fn half_move(
        &mut self,
        side: Mark,
        renderer: &mut dyn Renderer,
    ) -> Result<Option<Outcome>, SessionError> {
        let agent = match side {
            Mark::X => &self.x_agent,
            Mark::O => &self.o_agent,
        };

        let Some(action) = agent.get_action(&self.board) else {
            info!(agent = agent.name(), "No legal action left, ending in a draw");
            return Ok(Some(Outcome::Draw));
        };

        if let Err(reason) = self.board.apply_action(action) {
            warn!(agent = agent.name(), %action, %reason, "Agent proposed an invalid action");
            return Err(SessionError::Rejected {
                agent: agent.name().to_string(),
                action,
                reason,
            });
        }

        let status = self.board.game_status();
        debug!(agent = agent.name(), %action, %status, "Half-move applied");

        let half_move = HalfMove::new(
            self.moves.len() + 1,
            action,
            self.board.board_state(),
            status,
        );
        renderer.half_move(&half_move)?;
        self.moves.push(half_move);

        Ok(status.winner().map(Outcome::Win))
    }

    /// Snapshot of the moves so far with the given outcome.
    pub fn record(&self, outcome: Outcome) -> GameRecord {
        GameRecord {
            moves: self.moves.clone(),
            outcome,
            final_status: self.board.game_status(),
            final_board: self.board.board_state(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("board", &self.board)
            .field("x_agent", &self.x_agent.name())
            .field("o_agent", &self.o_agent.name())
            .field("moves", &self.moves.len())
            .finish()
    }
}

/// Plays one configured session, writing output to `out`.
#[instrument(skip(out))]
pub fn play(config: &SessionConfig, out: impl Write) -> Result<GameRecord, SessionError> {
    let mut session = Session::from_config(config);
    match config.format() {
        OutputFormat::Text => session.run(&mut TextRenderer::new(out)),
        OutputFormat::Json => session.run(&mut JsonRenderer::new(out)),
    }
}
