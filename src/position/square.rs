use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Represents a single square on the board as a (file, row) pair.
///
/// Rows are stored top to bottom:
/// - row 0 = rank 8 (black's back rank)
/// - row 7 = rank 1 (white's back rank)
///
/// Files run left to right, 0 = a, 7 = h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    file: u8,
}

impl Square {
    /// Creates a new Square if both coordinates are in 0-7.
    pub const fn new(file: u8, row: u8) -> Option<Self> {
        if file < 8 && row < 8 {
            Some(Self { row, file })
        } else {
            None
        }
    }

    /// Builds a square from coordinates already known to be in 0-7.
    pub(crate) const fn at(file: u8, row: u8) -> Self {
        debug_assert!(file < 8 && row < 8);
        Self {
            row: row & 7,
            file: file & 7,
        }
    }

    /// Returns the file index (0 = a, 7 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the row index (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the rank (1-8) of this square.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// Returns the file letter ('a'-'h') of this square.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    /// The square `files` to the right and `rows` down, if still on the board.
    pub fn offset(self, files: i8, rows: i8) -> Option<Self> {
        let file = self.file as i8 + files;
        let row = self.row as i8 + rows;
        if (0..8).contains(&file) && (0..8).contains(&row) {
            Self::new(file as u8, row as u8)
        } else {
            None
        }
    }

    /// All 64 squares, a8 first, h1 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |file| Square { row, file }))
    }
}

/// Parse a square identifier like "e4".
///
/// # Examples
/// ```
/// # use chessboard_rules::position::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!((square.file(), square.row()), (4, 4));
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[file, rank] = s.as_bytes() else {
            return Err(SquareParseError::WrongLength);
        };

        if !(b'a'..=b'h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(SquareParseError::BadRank);
        }

        Ok(Square {
            row: b'8' - rank,
            file: file - b'a',
        })
    }
}

/// Display square as its identifier (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

/// Error type for parsing square identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareParseError {
    /// Square identifier must be exactly 2 characters
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    /// File must be a letter from a-h
    #[error("file must be a-h")]
    BadFile,
    /// Rank must be a digit from 1-8
    #[error("rank must be 1-8")]
    BadRank,
}

/// A from/to square pair, written as four characters (e.g., "e2e4").
///
/// This is the shape of a suggestion returned by an external move oracle
/// and the shape of user input in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Signed file distance from origin to destination.
    #[inline]
    pub(crate) fn file_delta(self) -> i8 {
        self.to.file as i8 - self.from.file as i8
    }

    /// Signed row distance from origin to destination (positive = toward rank 1).
    #[inline]
    pub(crate) fn row_delta(self) -> i8 {
        self.to.row as i8 - self.from.row as i8
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::WrongLength);
        }
        let (from, to) = s.split_at(2);
        Ok(Move {
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Error type for parsing four-character moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move must be 4 characters (e.g., 'e2e4')")]
    WrongLength,
    #[error(transparent)]
    Square(#[from] SquareParseError),
}
