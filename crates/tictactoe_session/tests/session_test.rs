//! End-to-end tests for configured sessions.

use std::fs;
use tempfile::TempDir;
use tictactoe_board::{
    Action, AgentKind, Board, BoardState, Cell, FirstAvailableAgent, GameStatus, Mark,
};
use tictactoe_session::{
    GameRecord, Outcome, OutputFormat, Session, SessionConfig, TextRenderer, play,
};

const DEFAULT_GAME: &str = "\
x _ _\n_ _ _\n_ _ _\nO_TURN\n\
x o _\n_ _ _\n_ _ _\nX_TURN\n\
x o x\n_ _ _\n_ _ _\nO_TURN\n\
x o x\no _ _\n_ _ _\nX_TURN\n\
x o x\no x _\n_ _ _\nO_TURN\n\
x o x\no x o\n_ _ _\nX_TURN\n\
x o x\no x o\nx _ _\nX_WINS\n";

fn grid(rows: [&str; 3]) -> BoardState {
    let mut state = BoardState::default();
    for (row, line) in rows.iter().enumerate() {
        for (column, ch) in line.chars().enumerate() {
            state[row][column] = Cell::try_from(ch).expect("Bad grid character");
        }
    }
    state
}

#[test]
fn test_default_session_prints_every_half_move() {
    let mut out = Vec::new();
    let record = play(&SessionConfig::default(), &mut out).expect("Session failed");

    assert_eq!(String::from_utf8(out).unwrap(), DEFAULT_GAME);
    assert_eq!(*record.outcome(), Outcome::Win(Mark::X));
    assert_eq!(*record.final_status(), GameStatus::XWins);
    assert_eq!(record.moves().len(), 7);
}

#[test]
fn test_record_lists_row_major_moves() {
    let mut out = Vec::new();
    let record = play(&SessionConfig::default(), &mut out).expect("Session failed");

    let actions: Vec<Action> = record.moves().iter().map(|m| *m.action()).collect();
    assert_eq!(
        actions,
        [
            Action::new(0, 0, Mark::X),
            Action::new(0, 1, Mark::O),
            Action::new(0, 2, Mark::X),
            Action::new(1, 0, Mark::O),
            Action::new(1, 1, Mark::X),
            Action::new(1, 2, Mark::O),
            Action::new(2, 0, Mark::X),
        ]
    );
    let plies: Vec<usize> = record.moves().iter().map(|m| *m.ply()).collect();
    assert_eq!(plies, (1..=7).collect::<Vec<_>>());
}

#[test]
fn test_json_output_is_the_record() {
    let config = SessionConfig::default().with_format(OutputFormat::Json);
    let mut out = Vec::new();
    let record = play(&config, &mut out).expect("Session failed");

    let parsed: GameRecord = serde_json::from_slice(&out).expect("Output is not a record");
    assert_eq!(parsed, record);

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["outcome"]["win"], "x");
    assert_eq!(value["final_status"], "X_WINS");
}

#[test]
fn test_full_board_ends_in_draw_instead_of_spinning() {
    // One empty cell left, X to move, no line anywhere.
    let board = Board::from_state(grid(["xox", "xoo", "ox_"]), true);
    let mut session = Session::with_board(
        board,
        Box::new(FirstAvailableAgent::new("x")),
        Box::new(FirstAvailableAgent::new("o")),
    );

    let mut renderer = TextRenderer::new(Vec::new());
    let record = session.run(&mut renderer).expect("Session failed");

    assert_eq!(*record.outcome(), Outcome::Draw);
    assert_eq!(record.moves().len(), 1);
    assert_eq!(*record.final_board(), grid(["xox", "xoo", "oxx"]));
    // The board has no draw status; it still names the next turn.
    assert_eq!(*record.final_status(), GameStatus::OTurn);
    assert!(session.board().is_stalemate());

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text, "x o x\nx o o\no x x\nO_TURN\nDRAW\n");
}

#[test]
fn test_session_on_finished_board_plays_nothing() {
    let board = Board::from_state(grid(["ooo", "xx_", "x__"]), true);
    let mut session = Session::with_board(
        board,
        AgentKind::FirstAvailable.build("x"),
        AgentKind::FirstAvailable.build("o"),
    );

    let mut renderer = TextRenderer::new(Vec::new());
    let record = session.run(&mut renderer).expect("Session failed");

    assert_eq!(*record.outcome(), Outcome::Win(Mark::O));
    assert!(record.moves().is_empty());
    assert!(renderer.into_inner().is_empty());
}

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("session.toml");
    fs::write(
        &path,
        r#"player_x = "first_available"
player_o = "first_available"
format = "json"
"#,
    )
    .expect("Failed to write TOML");

    let config = SessionConfig::from_file(&path).expect("Load failed");
    assert_eq!(
        config,
        SessionConfig::new(
            AgentKind::FirstAvailable,
            AgentKind::FirstAvailable,
            OutputFormat::Json
        )
    );
}

#[test]
fn test_config_file_rejects_bad_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "format = [").expect("Failed to write TOML");

    let err = SessionConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
