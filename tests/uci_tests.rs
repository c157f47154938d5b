//! Front-end tests: position/option handling, move parsing, and the
//! interactive console mode.

use alpha_chess::uci::{play, Uci};
use shakmaty::{Color, Position, Role, Square};
use std::io::Cursor;

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_default_depth() {
    let uci = Uci::new();
    assert_eq!(uci.depth(), 3);
}

#[test]
fn test_setoption_depth() {
    let mut uci = Uci::new();
    uci.apply_setoption("Depth", Some("5"));
    assert_eq!(uci.depth(), 5);
}

#[test]
fn test_setoption_depth_is_clamped() {
    let mut uci = Uci::new();
    uci.apply_setoption("Depth", Some("99"));
    assert_eq!(uci.depth(), 6);
    uci.apply_setoption("Depth", Some("0"));
    assert_eq!(uci.depth(), 1);
}

#[test]
fn test_setoption_depth_invalid_value_ignored() {
    let mut uci = Uci::new();
    uci.apply_setoption("Depth", Some("deep"));
    assert_eq!(uci.depth(), 3);
}

// ============================================================================
// Position handling
// ============================================================================

#[test]
fn test_position_startpos_with_moves() {
    let mut uci = Uci::new();
    uci.apply_position(true, None, &["e2e4", "e7e5"]);
    assert_eq!(uci.board.turn(), Color::White);
    let e4 = uci.board.board().piece_at(Square::E4).unwrap();
    assert_eq!((e4.color, e4.role), (Color::White, Role::Pawn));
    let e5 = uci.board.board().piece_at(Square::E5).unwrap();
    assert_eq!((e5.color, e5.role), (Color::Black, Role::Pawn));
}

#[test]
fn test_position_from_fen() {
    let mut uci = Uci::new();
    uci.apply_position(false, Some("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1"), &[]);
    assert_eq!(uci.board.turn(), Color::White);
    let q = uci.board.board().piece_at(Square::E1).unwrap();
    assert_eq!((q.color, q.role), (Color::White, Role::Queen));
}

#[test]
fn test_position_illegal_move_is_skipped() {
    let mut uci = Uci::new();
    uci.apply_position(true, None, &["e2e5", "e2e4"]);
    // The illegal e2e5 is dropped, the following legal move still applies.
    assert_eq!(uci.board.turn(), Color::Black);
}

#[test]
fn test_ucinewgame_resets_board() {
    let mut uci = Uci::new();
    uci.apply_position(true, None, &["e2e4"]);
    uci.cmd_ucinewgame();
    assert_eq!(
        format!("{:?}", uci.board),
        format!("{:?}", shakmaty::Chess::default())
    );
}

// ============================================================================
// Move parsing
// ============================================================================

#[test]
fn test_parse_move_legal() {
    let uci = Uci::new();
    assert!(uci.parse_move("e2e4").is_some());
}

#[test]
fn test_parse_move_illegal() {
    let uci = Uci::new();
    assert!(uci.parse_move("e2e5").is_none());
    assert!(uci.parse_move("not a move").is_none());
}

#[test]
fn test_parse_move_promotion() {
    let mut uci = Uci::new();
    uci.apply_position(false, Some("8/P7/8/8/8/8/8/4K2k w - - 0 1"), &[]);
    let mv = uci.parse_move("a7a8q").unwrap();
    assert!(mv.is_promotion());
}

// ============================================================================
// Console game
// ============================================================================

#[test]
fn test_play_color_prompt_and_quit() {
    let mut input = Cursor::new("w\nquit\n");
    let mut output = Vec::new();
    play::run(&mut input, &mut output, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("You play White"));
}

#[test]
fn test_play_rejects_illegal_entry() {
    let mut input = Cursor::new("b\nw\nzzzz\nquit\n");
    let mut output = Vec::new();
    play::run(&mut input, &mut output, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Illegal move, try again."));
}

#[test]
fn test_play_engine_answers() {
    let mut input = Cursor::new("w\ne2e4\nquit\n");
    let mut output = Vec::new();
    play::run(&mut input, &mut output, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("engine plays"));
}

#[test]
fn test_play_invalid_color_reprompts() {
    let mut input = Cursor::new("purple\nw\nquit\n");
    let mut output = Vec::new();
    play::run(&mut input, &mut output, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Invalid input"));
    assert!(text.contains("You play White"));
}
