use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Letter used in piece codes and the board description (`w` / `b`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }

    /// Row holding this side's king and rooks at the start.
    #[inline]
    pub(crate) const fn home_row(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Row a pawn of this side starts on.
    #[inline]
    pub(crate) const fn pawn_row(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row step of a pawn advancing (white climbs toward rank 8).
    #[inline]
    pub(crate) const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Kind {
    /// Uppercase kind letter (`P N B R Q K`).
    pub const fn letter(self) -> char {
        match self {
            Kind::Pawn => 'P',
            Kind::Knight => 'N',
            Kind::Bishop => 'B',
            Kind::Rook => 'R',
            Kind::Queen => 'Q',
            Kind::King => 'K',
        }
    }

    /// Parses an uppercase kind letter.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(Kind::Pawn),
            'N' => Some(Kind::Knight),
            'B' => Some(Kind::Bishop),
            'R' => Some(Kind::Rook),
            'Q' => Some(Kind::Queen),
            'K' => Some(Kind::King),
            _ => None,
        }
    }
}

/// A piece on the board: a side combined with a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: Kind,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: Kind) -> Self {
        Self { side, kind }
    }

    /// Board-description letter: uppercase for white, lowercase for black.
    pub const fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.side {
            Side::White => letter,
            Side::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Inverse of [`Piece::fen_char`].
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        match Kind::from_letter(c.to_ascii_uppercase()) {
            Some(kind) => Some(Piece { side, kind }),
            None => None,
        }
    }
}

/// Parses a two-character piece code such as "wP" or "bK".
impl FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(side), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PieceParseError::WrongLength);
        };
        Ok(Piece {
            side: Side::from_letter(side).ok_or(PieceParseError::BadSide(side))?,
            kind: Kind::from_letter(kind).ok_or(PieceParseError::BadKind(kind))?,
        })
    }
}

/// Displays the two-character piece code (e.g., "wN").
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.letter(), self.kind.letter())
    }
}

/// Error type for parsing piece codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceParseError {
    #[error("piece code must be 2 characters (e.g., 'wP')")]
    WrongLength,
    #[error("unknown side letter '{0}' (expected 'w' or 'b')")]
    BadSide(char),
    #[error("unknown kind letter '{0}' (expected one of PNBRQK)")]
    BadKind(char),
}
