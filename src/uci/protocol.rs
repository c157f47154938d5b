use shakmaty::{fen::Fen, uci::UciMove, CastlingMode, Chess, Color, Position};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use vampirc_uci::{parser, UciMessage};

use crate::engine::eval::evaluate;
use crate::engine::search::{Searcher, DEFAULT_DEPTH};

use super::play;

/// Maximum configurable search depth; the search blocks the caller, so this
/// keeps a `go` answer in interactive time.
const MAX_DEPTH: u32 = 6;

pub struct Uci {
    pub board: Chess,
    searcher: Searcher,
    /// Depth in plies for `go` without an explicit `depth` argument.
    depth: u32,
}

impl Uci {
    pub fn new() -> Self {
        Uci {
            board: Chess::default(),
            searcher: Searcher::new(),
            depth: DEFAULT_DEPTH,
        }
    }

    /// Current default search depth (for tests).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            line.clear();
            match input.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let msg = parser::parse_one(line);
            match msg {
                UciMessage::Uci => self.cmd_uci(&mut stdout),
                UciMessage::IsReady => writeln!(stdout, "readyok").unwrap(),
                UciMessage::SetOption { name, value } => {
                    self.apply_setoption(name.trim(), value.as_deref());
                }
                UciMessage::UciNewGame => self.cmd_ucinewgame(),
                UciMessage::Position { startpos, fen, moves } => {
                    let fen_str = fen.as_ref().map(|f| f.as_str());
                    let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                    self.apply_position(startpos, fen_str, &refs);
                }
                UciMessage::Go { search_control, .. } => {
                    let depth = search_control
                        .as_ref()
                        .and_then(|sc| sc.depth)
                        .map(|d| u32::from(d).clamp(1, MAX_DEPTH))
                        .unwrap_or(self.depth);
                    self.cmd_go(depth, &mut stdout);
                }
                UciMessage::Quit => break,
                UciMessage::Unknown(ref s, _) => {
                    let parts: Vec<&str> = s.split_whitespace().collect();
                    if let Some(&first) = parts.first() {
                        match first {
                            "d" | "display" => self.cmd_display(&mut stdout),
                            "eval" => self.cmd_eval(&mut stdout),
                            "play" => play::run(&mut input, &mut stdout, self.depth),
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
            stdout.flush().unwrap();
        }
    }

    fn cmd_uci(&self, stdout: &mut io::Stdout) {
        writeln!(stdout, "id name alpha_chess 0.1.0").unwrap();
        writeln!(stdout, "id author alpha_chess authors").unwrap();
        writeln!(stdout).unwrap();
        writeln!(
            stdout,
            "option name Depth type spin default {} min 1 max {}",
            DEFAULT_DEPTH, MAX_DEPTH
        )
        .unwrap();
        writeln!(stdout, "uciok").unwrap();
    }

    /// Apply setoption by name and value.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        if opt == "depth" {
            if let Ok(d) = value.parse::<u32>() {
                self.depth = d.clamp(1, MAX_DEPTH);
            }
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.board = Chess::default();
    }

    /// Apply a parsed `position` command: base position plus a move list.
    pub fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.board = Chess::default();
        } else if let Some(fen_str) = fen {
            if let Ok(f) = fen_str.parse::<Fen>() {
                if let Ok(pos) = f.into_position::<Chess>(CastlingMode::Standard) {
                    self.board = pos;
                }
            }
        }

        for &s in move_strs {
            if let Some(mv) = self.parse_move(s) {
                if let Ok(next) = self.board.clone().play(&mv) {
                    self.board = next;
                }
            }
        }
    }

    /// Parse a coordinate-notation move and check it against the legal set.
    pub fn parse_move(&self, move_str: &str) -> Option<shakmaty::Move> {
        let uci: UciMove = move_str.parse().ok()?;
        let mv = uci.to_move(&self.board).ok()?;
        if self.board.is_legal(&mv) {
            Some(mv)
        } else {
            None
        }
    }

    /// Run the search and output an info line plus bestmove.
    fn cmd_go(&mut self, depth: u32, stdout: &mut io::Stdout) {
        let start = Instant::now();
        match self.searcher.search_root(&self.board, depth) {
            Some((mv, score)) => {
                let elapsed = start.elapsed().as_millis();
                let stats = self.searcher.stats();
                let nps = if elapsed > 0 {
                    stats.nodes as u128 * 1000 / elapsed
                } else {
                    0
                };
                writeln!(
                    stdout,
                    "info depth {} score cp {} nodes {} nps {} time {}",
                    depth, score, stats.nodes, nps, elapsed
                )
                .unwrap();
                writeln!(stdout, "bestmove {}", mv.to_uci(CastlingMode::Standard)).unwrap();
            }
            None => writeln!(stdout, "bestmove 0000").unwrap(),
        }
    }

    fn cmd_display(&self, stdout: &mut io::Stdout) {
        writeln!(stdout, "\n{:?}", self.board).unwrap();
    }

    fn cmd_eval(&self, stdout: &mut io::Stdout) {
        let score = evaluate(&self.board);
        writeln!(stdout, "Evaluation: {} cp", score).unwrap();
        writeln!(
            stdout,
            "(Positive favors White; {} to move)",
            if self.board.turn() == Color::White {
                "White"
            } else {
                "Black"
            }
        )
        .unwrap();
    }
}

impl Default for Uci {
    fn default() -> Self {
        Self::new()
    }
}
