//! Interactive console game against the engine.
//!
//! The human enters moves in coordinate notation (e2e4, e7e8q); the engine
//! answers with a fixed-depth search. A bare from-to square pair onto the
//! last rank promotes to a queen, the way most GUIs do.

use shakmaty::{uci::UciMove, CastlingMode, Chess, Color, Move, Position};
use std::io::{BufRead, Write};

use crate::engine::search::Searcher;

pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, depth: u32) {
    let mut board = Chess::default();
    let mut searcher = Searcher::new();

    let human = match ask_color(input, output) {
        Some(color) => color,
        None => return,
    };
    writeln!(
        output,
        "You play {}. Enter moves like e2e4, or 'quit' to stop.",
        color_name(human)
    )
    .unwrap();

    loop {
        writeln!(output, "\n{:?}", board).unwrap();

        if board.is_game_over() {
            report_result(&board, output);
            return;
        }

        if board.turn() == human {
            write!(output, "your move: ").unwrap();
            output.flush().unwrap();
            let line = match read_line(input) {
                Some(line) => line,
                None => return,
            };
            let entry = line.trim();
            if entry == "quit" || entry == "resign" {
                return;
            }
            match parse_human_move(&board, entry) {
                Some(mv) => {
                    board = board.clone().play(&mv).unwrap();
                }
                None => writeln!(output, "Illegal move, try again.").unwrap(),
            }
        } else if let Some((mv, score)) = searcher.search_root(&board, depth) {
            writeln!(
                output,
                "engine plays {} (eval {} cp, {} nodes)",
                mv.to_uci(CastlingMode::Standard),
                score,
                searcher.stats().nodes
            )
            .unwrap();
            board = board.clone().play(&mv).unwrap();
        } else {
            // No legal move and not game over cannot happen; bail out.
            return;
        }
    }
}

fn ask_color<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Option<Color> {
    loop {
        write!(output, "Play as White or Black? (w/b): ").unwrap();
        output.flush().unwrap();
        let line = read_line(input)?;
        match line.trim().to_lowercase().as_str() {
            "w" | "white" => return Some(Color::White),
            "b" | "black" => return Some(Color::Black),
            _ => writeln!(output, "Invalid input. Please enter 'w' or 'b'.").unwrap(),
        }
    }
}

fn parse_human_move(board: &Chess, entry: &str) -> Option<Move> {
    if let Some(mv) = parse_uci(board, entry) {
        return Some(mv);
    }
    if entry.len() == 4 {
        return parse_uci(board, &format!("{entry}q"));
    }
    None
}

fn parse_uci(board: &Chess, s: &str) -> Option<Move> {
    let uci: UciMove = s.parse().ok()?;
    let mv = uci.to_move(board).ok()?;
    if board.is_legal(&mv) {
        Some(mv)
    } else {
        None
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn report_result<W: Write>(board: &Chess, output: &mut W) {
    if board.is_checkmate() {
        writeln!(output, "Checkmate! {} wins.", color_name(!board.turn())).unwrap();
    } else {
        writeln!(output, "Game drawn.").unwrap();
    }
}
