//! Static evaluation: material count plus positional heuristics.
//!
//! Scores are centipawns from White's point of view: positive favors White,
//! negative favors Black. The searcher owns the min/max logic; this module
//! never looks at whose turn it is except to sign terminal scores.

use shakmaty::{Bitboard, Board, Chess, Color, Piece, Position, Rank, Role, Square};

/// Score of a checkmated position, signed against the side to move.
pub const MATE_SCORE: i32 = 10_000;

/// Score of stalemate and insufficient-material draws.
pub const DRAW_SCORE: i32 = 0;

/// Bonus per piece occupying one of the four central squares.
const CENTER_BONUS: i32 = 10;

/// Bonus per knight or bishop developed off its home rank.
const DEVELOPMENT_BONUS: i32 = 5;

const CENTER: [Square; 4] = [Square::E4, Square::D4, Square::E5, Square::D5];

/// Material weight of a piece.
///
/// The king weight is never realized through capture (checkmate is detected
/// first), but keeps the evaluation sane if terminal detection is bypassed.
pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20_000,
    }
}

/// Evaluate a position.
///
/// Terminal states take precedence: checkmate scores `MATE_SCORE` for the
/// side that delivered it, stalemate and insufficient material score an
/// exact draw. Anything else is material plus positional terms.
pub fn evaluate(pos: &Chess) -> i32 {
    if pos.is_checkmate() {
        return if pos.turn() == Color::White {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }

    if pos.is_stalemate() || pos.is_insufficient_material() {
        return DRAW_SCORE;
    }

    let board = pos.board();
    material(board) + positional(board)
}

fn material(board: &Board) -> i32 {
    let mut score = 0;
    for role in Role::ALL {
        let white = board.by_piece(Piece { color: Color::White, role }).count() as i32;
        let black = board.by_piece(Piece { color: Color::Black, role }).count() as i32;
        score += piece_value(role) * (white - black);
    }
    score
}

fn positional(board: &Board) -> i32 {
    center_control(board) + development(board)
}

fn center_control(board: &Board) -> i32 {
    let mut score = 0;
    for sq in CENTER {
        if let Some(piece) = board.piece_at(sq) {
            score += match piece.color {
                Color::White => CENTER_BONUS,
                Color::Black => -CENTER_BONUS,
            };
        }
    }
    score
}

fn development(board: &Board) -> i32 {
    let minors: Bitboard = board.knights() | board.bishops();
    let mut score = 0;
    for sq in minors & board.by_color(Color::White) {
        if sq.rank() > Rank::First {
            score += DEVELOPMENT_BONUS;
        }
    }
    for sq in minors & board.by_color(Color::Black) {
        if sq.rank() < Rank::Eighth {
            score -= DEVELOPMENT_BONUS;
        }
    }
    score
}
