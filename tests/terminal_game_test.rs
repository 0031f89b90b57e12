//! Whole games played through the terminal console with scripted input.

use noughts::{GameConfig, PlayerNames, TerminalConsole};
use noughts_core::{ClassicSession, ConsoleError, GameStatus, Player};
use std::io::Cursor;

fn play(input: &str, config: &GameConfig) -> (Result<GameStatus, ConsoleError>, String) {
    play_bytes(input.as_bytes(), config)
}

fn play_bytes(input: &[u8], config: &GameConfig) -> (Result<GameStatus, ConsoleError>, String) {
    let console = TerminalConsole::new(Cursor::new(input.to_vec()), Vec::new(), config);
    let mut session = ClassicSession::new(console);
    let status = session.play();
    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    (status, output)
}

fn plain() -> GameConfig {
    GameConfig::default().with_clear_screen(false)
}

#[test]
fn test_first_player_wins_top_row() {
    let (status, output) = play("0\n3\n1\n4\n2\n", &plain());
    assert_eq!(status.unwrap(), GameStatus::Win(Player::One));
    assert!(output.contains("| X | X | X |"));
    assert!(output.contains("| O | O | 5 |"));
    assert!(output.trim_end().ends_with("***** Player 1 won! *****"));
}

#[test]
fn test_tie_is_reported_as_draw() {
    let (status, output) = play("0\n1\n2\n4\n3\n5\n7\n6\n8\n", &plain());
    assert_eq!(status.unwrap(), GameStatus::Tie);
    assert!(output.contains("***** It's a draw! *****"));
}

#[test]
fn test_bad_input_keeps_same_player() {
    let (status, output) = play("4\nfour\n4\n9\n-3\n0\n8\n1\n6\n2\n", &plain());
    assert_eq!(status.unwrap(), GameStatus::Win(Player::Two));
    assert!(output.contains("'four' is not a cell number."));
    assert!(output.contains("Cell 4 is already taken. Choose another cell."));
    assert!(output.contains("Cell 9 is not on the board. Choose another cell."));
    assert!(output.contains("Cell -3 is not on the board. Choose another cell."));
    // Every prompt between the first and second accepted moves is for player 2.
    let second_turn = output.split("Player 1, enter a number: ").nth(1).unwrap();
    assert!(second_turn.contains("Player 2, enter a number: "));
}

#[test]
fn test_garbled_bytes_do_not_end_the_game() {
    let (status, output) = play_bytes(b"0\n\xff\xfe\n3\n1\n4\n2\n", &plain());
    assert_eq!(status.unwrap(), GameStatus::Win(Player::One));
    assert!(output.contains("is not a cell number."));
}

#[test]
fn test_custom_names_in_header_and_result() {
    let config = plain().with_player_names(PlayerNames::new("Ada", "Grace"));
    let (status, output) = play("0\n3\n1\n4\n8\n5\n", &config);
    assert_eq!(status.unwrap(), GameStatus::Win(Player::Two));
    assert!(output.contains("Ada [X], Grace [O]"));
    assert!(output.contains("Grace, enter a number: "));
    assert!(output.contains("***** Grace won! *****"));
}

#[test]
fn test_input_ending_mid_game_is_an_error() {
    let (status, _) = play("0\n3\n", &plain());
    assert!(matches!(status, Err(ConsoleError::InputClosed)));
}
