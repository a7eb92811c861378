//! Board-description notation.
//!
//! A single line of the form
//! `<rank8>/<rank7>/.../<rank1> <side> - - 0 1`, handed to an external
//! move oracle. The castling, en passant and move-counter fields are a
//! fixed placeholder and do not reflect the game.

use thiserror::Error;

use crate::position::{Board, Move, MoveParseError, Piece, Side, Square};

/// Trailing fields written after the side to move.
pub const PLACEHOLDER_FIELDS: &str = "- - 0 1";

/// Encodes `board` and the side to move as a board description.
///
/// # Examples
/// ```
/// # use chessboard_rules::{notation::board_description, position::{Board, Side}};
/// assert_eq!(
///     board_description(&Board::starting(), Side::White),
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
/// );
/// ```
pub fn board_description(board: &Board, side: Side) -> String {
    format!("{} {} {PLACEHOLDER_FIELDS}", placement(board), side.letter())
}

/// The piece-placement field alone: ranks 8 to 1 separated by `/`, runs
/// of empty squares written as a digit.
pub fn placement(board: &Board) -> String {
    let mut out = String::with_capacity(71);
    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for cell in cells {
            match cell {
                None => empty += 1,
                Some(piece) => {
                    flush_empty(&mut out, &mut empty);
                    out.push(piece.fen_char());
                }
            }
        }
        flush_empty(&mut out, &mut empty);
    }
    out
}

fn flush_empty(out: &mut String, empty: &mut u8) {
    if *empty > 0 {
        out.push((b'0' + *empty) as char);
        *empty = 0;
    }
}

/// Decodes a piece-placement field.
pub fn parse_placement(field: &str) -> Result<Board, DescriptionError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(DescriptionError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.into_iter().enumerate() {
        let mut file = 0u8;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10).filter(|run| (1..=8).contains(run)) {
                file += run as u8;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(DescriptionError::BadPiece(c))?;
                let Some(square) = Square::new(file, row as u8) else {
                    return Err(DescriptionError::RankWidth { rank: 8 - row });
                };
                board.set(square, Some(piece));
                file += 1;
            }
            if file > 8 {
                return Err(DescriptionError::RankWidth { rank: 8 - row });
            }
        }
        if file != 8 {
            return Err(DescriptionError::RankWidth { rank: 8 - row });
        }
    }
    Ok(board)
}

/// Decodes a board description into a board and the side to move.
///
/// Only the placement and side fields are read; whatever follows is
/// ignored, so full FEN lines from other tools are accepted too.
pub fn parse_description(line: &str) -> Result<(Board, Side), DescriptionError> {
    let mut fields = line.split_whitespace();
    let board = parse_placement(fields.next().ok_or(DescriptionError::Empty)?)?;
    let field = fields.next().ok_or(DescriptionError::MissingSide)?;
    let mut letters = field.chars();
    let side = match (letters.next(), letters.next()) {
        (Some(letter), None) => Side::from_letter(letter),
        _ => None,
    }
    .ok_or_else(|| DescriptionError::BadSide(field.to_string()))?;
    Ok((board, side))
}

/// Splits a move oracle's reply (e.g. `"e2e4"`) into a from/to pair.
pub fn parse_suggestion(reply: &str) -> Result<Move, MoveParseError> {
    reply.trim().parse()
}

/// Error type for decoding a board description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptionError {
    #[error("board description is empty")]
    Empty,
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 squares")]
    RankWidth { rank: usize },
    #[error("unknown piece letter '{0}'")]
    BadPiece(char),
    #[error("side to move is missing")]
    MissingSide,
    #[error("side to move must be 'w' or 'b', found '{0}'")]
    BadSide(String),
}
